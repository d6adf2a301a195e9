use std::path::PathBuf;

use chrono::Utc;
use gridstats_ingest::process_racer;
use gridstats_model::RacerRecord;

use crate::support;

pub fn run(root: PathBuf, racer_id: i64, run_label: String, json: bool) {
    let source = support::source_or_exit(root, &run_label);
    let imported_at = Utc::now();

    let outcome = process_racer(&source, imported_at, racer_id).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });

    if json {
        let rendered = serde_json::to_string_pretty(&outcome.record).unwrap_or_else(|e| {
            eprintln!("error: failed to render record: {e}");
            std::process::exit(1);
        });
        println!("{rendered}");
        return;
    }

    print_record(&outcome.record);
}

fn print_record(record: &RacerRecord) {
    println!("racer {}", record.racer_id);
    println!("  imported at: {}", record.imported_at);

    let Some(profile) = record.profile.as_ref() else {
        println!("  does not exist (both sources agree)");
        return;
    };

    println!("  login: {}", profile.login);
    println!("  online: {}", profile.is_online);
    println!(
        "  rank: {} (level {}), title {:?}",
        profile.rank,
        profile.rank.level(),
        profile.title
    );
    println!("  blocked: {:?} (code {})", profile.blocked, profile.blocked.code());
    println!("  car: {} in {}", profile.car_code, profile.car_color);

    let Some(stats) = profile.stats.as_ref() else {
        println!("  stats: none (no usable index data)");
        return;
    };

    println!("  registered: {}", stats.registered);
    println!("  achievements: {}", stats.achievements);
    println!("  total races: {}", stats.total_races);
    match stats.best_speed {
        Some(best_speed) => println!("  best speed: {best_speed}"),
        None => println!("  best speed: — (no races in the base mode)"),
    }
    println!("  rating level: {}", stats.rating_level);
    println!("  friends: {}", stats.friends);
    println!("  vocabularies: {}", stats.vocabularies);
    println!("  cars owned: {}", stats.cars_owned);
}
