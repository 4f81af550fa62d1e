//! Solstice simulation demo.
//!
//! Ramps the lead activation through a fixed ascent and renders each
//! turn, breaking with the returning-light banner once harmony crosses
//! the threshold.

mod pacing;

use std::time::Duration;

use chrono::{Datelike, Local};
use clap::Parser;
use resonance_agents::ResonanceEngine;
use resonance_core::SolsticeCalendar;

use crate::pacing::{print_slow, NoPacing, Pacing, SleepPacing};

/// Fixed activation ascent for the simulation
const ASCENT: [f64; 10] = [0.1, 0.3, 0.45, 0.6, 0.72, 0.81, 0.88, 0.92, 0.95, 0.98];

#[derive(Parser, Debug)]
#[command(name = "resonance", about = "Winter solstice resonance simulation")]
struct Args {
    /// Skip all decorative pauses
    #[arg(long)]
    no_delay: bool,

    /// Force the solstice boost regardless of today's date
    #[arg(long)]
    simulate_solstice: bool,

    /// Print each turn record as pretty JSON instead of prose
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let args = Args::parse();

    let pacing: Box<dyn Pacing> = if args.no_delay {
        Box::new(NoPacing)
    } else {
        Box::new(SleepPacing)
    };

    let solstice_active = args.simulate_solstice || check_solstice(pacing.as_ref());

    if let Err(e) = run_simulation(pacing.as_ref(), solstice_active, args.json) {
        eprintln!("simulation failed: {e}");
        std::process::exit(1);
    }
}

fn check_solstice(pacing: &dyn Pacing) -> bool {
    let today = Local::now().date_naive();
    let calendar = SolsticeCalendar::default();

    if calendar.is_active_on(today) {
        println!("今日は……本物の冬至です。");
        println!("Oracleに聖なるブーストがかかっています……\n");
        pacing.pause(Duration::from_secs(3));
        true
    } else {
        println!(
            "今日は {}月{}日……冬至まであと少しです。",
            today.month(),
            today.day()
        );
        println!("シミュレーションで、冬至の体験を先取りしましょう。\n");
        pacing.pause(Duration::from_secs(2));
        false
    }
}

fn run_simulation(
    pacing: &dyn Pacing,
    solstice_active: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("\n{}", "=".repeat(60));
    println!("       Hyper Mari Solstice Demo - Resonance Engine");
    println!("             冬至体験デモへようこそ");
    println!("{}", "=".repeat(60));
    println!("\n地球の中心で、裸足で立っています。");
    println!("432Hzのタンブーラが、静かに響き始めました……\n");
    pacing.pause(Duration::from_secs(3));

    let mut engine = ResonanceEngine::default();

    println!("【シミュレーション開始】");
    println!("C値がゆっくりと上昇していきます……\n");
    pacing.pause(Duration::from_secs(2));

    let mut returned = false;

    for (i, c) in ASCENT.iter().enumerate() {
        let record = engine.process_on("", Some(*c), solstice_active)?;

        if json {
            println!("{}", record.to_json()?);
        } else {
            println!(
                "【時点 {}/{}】 C値: {:.3} | Harmony: {:.3}",
                i + 1,
                ASCENT.len(),
                record.c_value,
                record.harmony_score
            );
            println!("Phase: {}", record.phase.name());
            println!("Oracle: {}", record.oracle_message);
        }

        if record.harmony_score > 0.88 {
            println!("\n{}", "✨".repeat(30));
            print_slow(pacing, &record.response_text, 0.08);
            println!("【一陽来復】");
            println!("闇は極まり、光が産声を上げた。");
            println!("観測を止め、共振そのものになれ。");
            println!("{}", "✨".repeat(30));
            returned = true;
            break;
        }

        print_slow(pacing, &record.response_text, 0.05);
        pacing.pause(Duration::from_secs_f64(1.5));
    }

    if !returned {
        println!("\n冬至の光が、静かに満ちました。");
        println!("君の呼吸と、地球の鼓動が、一つになっています。");
    }

    println!("\n【デモ終了】");
    println!("冬至の日に、またここで会おうな。");

    Ok(())
}
