use std::sync::mpsc;

use eyre::{Result, WrapErr as _};
use log::{info, warn};
use model::statistics::{DayIndicator, WeeklyStatistics};
use schedule::{service::navigation::ViewMode, Schedule};
use storage::{CalendarStore, SessionSource};

mod command;

use command::{parse_commands, Command};

fn main() -> Result<()> {
    color_eyre::install()?;
    let env = env::Env::load()?;
    pretty_env_logger::formatted_builder()
        .parse_filters(env.rust_log())
        .init();

    let commands = parse_commands(std::env::args().skip(1))?;

    if let Some(today) = env.today_override() {
        info!("Using SCHEDULE_TODAY={}", today);
    }
    info!("loading fixture");
    let store = CalendarStore::load(env.fixture())
        .wrap_err_with(|| format!("Failed to load {}", env.fixture().display()))?;
    let mut schedule = Schedule::new(store, env.today()).wrap_err("Failed to open schedule")?;

    let (tx, rx) = mpsc::channel();
    schedule.subscribe(tx);

    for command in commands {
        match command {
            Command::Advance(direction) => {
                schedule.advance_week(direction)?;
            }
            Command::SelectDay(day) => {
                schedule.select_day(day)?;
            }
            Command::Complete(id) => {
                match schedule.calendar.source().find_session(id) {
                    Some((day, session)) => info!("Completing \"{}\" on {}", session.title, day),
                    None => warn!("Session {} is not in the fixture", id),
                }
                if !schedule.mark_complete(id) {
                    info!("Session {} is already complete", id);
                }
            }
            Command::View(mode) => schedule.set_view_mode(mode),
        }
    }

    for event in rx.try_iter() {
        println!(
            "completed #{} at {}",
            event.session_id,
            event.completed_at.format("%H:%M:%S")
        );
    }
    print_schedule(&schedule);
    Ok(())
}

fn print_schedule<S: SessionSource>(schedule: &Schedule<S>) {
    println!("Week {}", schedule.week());
    for day in schedule.visible_days() {
        println!(
            "{} {} {}",
            day.week_day(),
            day,
            fmt_indicator(&schedule.day_indicator(day))
        );
        for item in schedule.agenda(day) {
            let session = &item.session;
            println!(
                "  [{}] #{} {}-{} {} ({}, {}, {}) {} @ {}",
                if item.completed { "x" } else { " " },
                session.id,
                session.start_at.format("%H:%M"),
                session.end_at().format("%H:%M"),
                session.title,
                session.kind,
                session.intensity,
                session.duration_min,
                session.coach,
                session.location,
            );
        }
    }

    match schedule.navigator.mode() {
        ViewMode::Week => print_week_stats(&schedule.weekly_stats()),
        ViewMode::Day => {
            let stat = schedule.selected_day_stats();
            println!(
                "{}/{} sessions complete, {} min, {:.0}%",
                stat.completed_count,
                stat.total_sessions,
                stat.total_duration_min,
                stat.progress_percent
            );
        }
    }
}

fn print_week_stats(stat: &WeeklyStatistics) {
    println!(
        "{}/{} sessions complete ({} left), {} min total, {}% complete, {} active days",
        stat.completed_count,
        stat.total_sessions,
        stat.remaining_count(),
        stat.total_duration_min,
        stat.progress_rounded(),
        stat.active_day_count
    );
    for (kind, summary) in &stat.by_kind {
        println!(
            "  {}: {}/{} sessions, {} min",
            kind, summary.completed, summary.sessions, summary.duration_min
        );
    }
}

fn fmt_indicator(indicator: &DayIndicator) -> String {
    match indicator {
        DayIndicator::Empty => "-".to_owned(),
        DayIndicator::FullyComplete => "✔️".to_owned(),
        DayIndicator::Markers(markers) => markers
            .iter()
            .map(|m| m.color().hex())
            .collect::<Vec<_>>()
            .join(" "),
    }
}
