use std::fs;
use std::io::Read;

use anyhow::Context;
use clap::{Arg, ArgAction, Command};
use tracing::info;

use crate::{get_plan_field, parse_plans, parse_travel_details, split_final_plan};

/// CLI entry point for the vibe-planner inspection tool
pub fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let matches = Command::new("vibe-planner")
        .version("0.1.0")
        .about("Parse LLM-generated hangout plan text into structured JSON")
        .arg(
            Arg::new("input")
                .help("Plan text file to parse, or - for stdin")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("mode")
                .short('m')
                .long("mode")
                .value_name("MODE")
                .help("What the input is: plans, travel, or final")
                .default_value("plans"),
        )
        .arg(
            Arg::new("field")
                .short('f')
                .long("field")
                .value_name("KEY")
                .help("Extract a single labeled field instead of printing JSON"),
        )
        .arg(
            Arg::new("compact")
                .short('c')
                .long("compact")
                .action(ArgAction::SetTrue)
                .help("Print compact JSON instead of pretty-printed"),
        )
        .get_matches();

    let input = matches.get_one::<String>("input").unwrap();
    let content = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        buffer
    } else {
        fs::read_to_string(input).with_context(|| format!("failed to read {input}"))?
    };

    if let Some(key) = matches.get_one::<String>("field") {
        println!("{}", get_plan_field(&content, key));
        return Ok(());
    }

    let mode = matches.get_one::<String>("mode").unwrap().as_str();
    let value = match mode {
        "plans" => {
            let parsed = parse_plans(&content);
            info!("parsed {} plan option(s)", parsed.plans.len());
            serde_json::to_value(parsed)?
        }
        "travel" => serde_json::to_value(parse_travel_details(&content))?,
        "final" => {
            let sections = split_final_plan(&content);
            let plan = parse_plans(&sections.plan_section);
            let travel = parse_travel_details(&sections.travel_section);
            serde_json::json!({
                "plan": plan.plans.first(),
                "travel": travel,
            })
        }
        other => anyhow::bail!("unknown mode {other:?} (expected plans, travel, or final)"),
    };

    let rendered = if matches.get_flag("compact") {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };
    println!("{rendered}");

    Ok(())
}
