//! Synthetic chat export generator for testing vostats.
//!
//! Usage: cargo run --features gen-test --bin gen_chat -- [lines] [output]
//! Example: cargo run --features gen-test --bin gen_chat -- 50000 big_export.txt

use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};

use rand::Rng;
use rand::seq::SliceRandom;

const SENDERS: &[&str] = &[
    "Alice", "Bob", "Carol", "Dave", "Eva", "Frank", "Муха", "José", "Łukasz",
];

const NOISE: &[&str] = &[
    "hallo allemaal",
    "wie gaat er mee lunchen?",
    "haha",
    "👍",
    "zie je morgen",
    "heeft iemand mijn oplader gezien: de witte?",
    "ok",
    "🎉🎉🎉",
];

const KEYWORDS: &[&str] = &["vo", "voo", "vooo", "bvo", "bravo", "VO", "Vooo"];

fn main() {
    let args: Vec<String> = env::args().collect();
    let lines: usize = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(10_000);
    let output = args
        .get(2)
        .map_or("test_export.txt", String::as_str);

    let mut rng = rand::thread_rng();
    let file = File::create(output).expect("create output file");
    let mut writer = BufWriter::new(file);

    for _ in 0..lines {
        let year = rng.gen_range(2016..=2020);
        let month = rng.gen_range(1..=12);
        let day = rng.gen_range(1..=28);
        let sender = SENDERS.choose(&mut rng).expect("non-empty senders");

        // Roughly a third of the traffic is game attempts around 12:13.
        let roll: f64 = rng.r#gen();
        let (hour, minute, content) = if roll < 0.25 {
            (12, 13, *KEYWORDS.choose(&mut rng).expect("non-empty keywords"))
        } else if roll < 0.33 {
            let minute = if rng.r#gen() { 12 } else { 14 };
            let content = if rng.gen_ratio(1, 5) {
                "Dit bericht is verwijderd"
            } else {
                *KEYWORDS.choose(&mut rng).expect("non-empty keywords")
            };
            (12, minute, content)
        } else {
            (
                rng.gen_range(0..24),
                rng.gen_range(0..60),
                *NOISE.choose(&mut rng).expect("non-empty noise"),
            )
        };

        // Sprinkle in malformed lines like real exports have.
        if rng.gen_ratio(1, 100) {
            writeln!(writer, "{sender} changed the group description").expect("write line");
            continue;
        }

        writeln!(
            writer,
            "{day:02}-{month:02}-{year} {hour:02}:{minute:02} - {sender}: {content}"
        )
        .expect("write line");
    }

    writer.flush().expect("flush output");
    println!("Wrote {lines} lines to {output}");
}
