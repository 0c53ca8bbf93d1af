use eyre::{bail, eyre, Result, WrapErr as _};
use model::ids::{DayId, SessionId};
use schedule::service::navigation::{Direction, ViewMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Advance(Direction),
    SelectDay(DayId),
    Complete(SessionId),
    View(ViewMode),
}

/// Parses `next`, `prev`, `day <YYYY-MM-DD>`, `complete <id>`, `view week|day`.
pub fn parse_commands<I, T>(args: I) -> Result<Vec<Command>>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let args = args
        .into_iter()
        .map(|a| a.as_ref().to_owned())
        .collect::<Vec<_>>();
    let mut args = args.iter().map(String::as_str);
    let mut commands = Vec::new();

    while let Some(arg) = args.next() {
        let command = match arg {
            "next" => Command::Advance(Direction::Forward),
            "prev" => Command::Advance(Direction::Back),
            "day" => {
                let value = args.next().ok_or_else(|| eyre!("day expects a date"))?;
                Command::SelectDay(
                    value
                        .parse()
                        .wrap_err_with(|| format!("Bad day: {}", value))?,
                )
            }
            "complete" => {
                let value = args.next().ok_or_else(|| eyre!("complete expects an id"))?;
                Command::Complete(
                    value
                        .parse()
                        .wrap_err_with(|| format!("Bad session id: {}", value))?,
                )
            }
            "view" => match args.next() {
                Some("week") => Command::View(ViewMode::Week),
                Some("day") => Command::View(ViewMode::Day),
                other => bail!("view expects week or day, got {:?}", other),
            },
            other => bail!("Unknown command: {}", other),
        };
        commands.push(command);
    }
    Ok(commands)
}
