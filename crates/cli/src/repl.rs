//! Line-driven interactive filter session.
//!
//! Each line is one UI action against the session's `FilterController`.
//! After every action the latest published view is rendered.

use std::io::Write;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use colored::Colorize;
use pipeline::{BedroomCriteria, CountFilter, PriceCeiling, PriceRange, RoomTypeSelection};
use session::FilterController;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render;

const HELP: &str = "\
Commands:
  type <all|room|house|...>           select a room type
  price <min> [max|unbounded]         set the price range
  rooms <bedrooms> <beds> <bathrooms> set counts (a number or \"any\")
  reset                               clear type and counts, keep price
  apply                               show results for the current filters
  show                                print the current session state
  help                                show this message
  quit                                leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    RoomType(RoomTypeSelection),
    Price(PriceRange),
    Rooms(BedroomCriteria),
    Reset,
    Apply,
    Show,
    Help,
    Quit,
}

fn parse_price(value: &str) -> Result<u64> {
    value
        .replace(',', "")
        .parse::<u64>()
        .with_context(|| format!("invalid price: {value:?}"))
}

impl FromStr for SessionCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let command = words.next().ok_or_else(|| anyhow!("empty command"))?;
        let args: Vec<&str> = words.collect();

        let parsed = match (command.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("type", [selection]) => SessionCommand::RoomType(RoomTypeSelection::from(*selection)),
            ("price", [min]) => SessionCommand::Price(PriceRange::at_least(parse_price(min)?)),
            ("price", [min, max]) => SessionCommand::Price(PriceRange {
                min: parse_price(min)?,
                max: max.parse::<PriceCeiling>()?,
            }),
            ("rooms", [bedrooms, beds, bathrooms]) => SessionCommand::Rooms(BedroomCriteria {
                bedrooms: bedrooms.parse::<CountFilter>()?,
                beds: beds.parse::<CountFilter>()?,
                bathrooms: bathrooms.parse::<CountFilter>()?,
            }),
            ("reset", []) => SessionCommand::Reset,
            ("apply", []) => SessionCommand::Apply,
            ("show", []) => SessionCommand::Show,
            ("help", []) => SessionCommand::Help,
            ("quit" | "exit", []) => SessionCommand::Quit,
            (other, _) => bail!("unrecognised command {other:?}; type \"help\" for usage"),
        };
        Ok(parsed)
    }
}

/// Run commands from stdin until `quit` or end of input.
pub async fn run(controller: &mut FilterController) -> Result<()> {
    let mut views = controller.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{HELP}");
    render::print_state(controller.state());

    loop {
        print!("{} ", ">".bold());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{}", err.to_string().red());
                continue;
            }
        };

        match command {
            SessionCommand::RoomType(selection) => controller.set_room_type(selection),
            SessionCommand::Price(range) => controller.set_price_range(range),
            SessionCommand::Rooms(criteria) => controller.set_bedroom_criteria(criteria),
            SessionCommand::Reset => controller.reset_filters(),
            SessionCommand::Apply => render::print_listings(&controller.apply_filters()),
            SessionCommand::Show => render::print_state(controller.state()),
            SessionCommand::Help => println!("{HELP}"),
            SessionCommand::Quit => break,
        }

        if views.has_changed()? {
            let view = views.borrow_and_update().clone();
            if let Some(message) = controller.status_message() {
                println!("{}", message.cyan());
            }
            println!(
                "{}",
                format!("revision {}: {} listings", view.revision, view.listings.len()).dimmed()
            );
            render::print_listings(&view.listings);
        }
    }

    Ok(())
}
