//! Synthetic WhatsApp transcript generator for stress tests and benches.
//!
//! Usage: cargo run --features gen-test --bin gen_transcript -- [messages] [output] [year]
//! Example: cargo run --features gen-test --bin gen_transcript -- 100000 big_chat.txt 2024

use rand::Rng;
use rand::seq::SliceRandom;
use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};

const EMOJIS: &[&str] = &[
    "😀", "😂", "🤣", "😍", "🥰", "🤔", "🙄", "😱", "💀", "🔥", "👍", "❤️", "🎉", "🍻", "🏖️",
    "👨‍👩‍👧‍👦", "🤷‍♀️",
];

const AUTHORS: &[&str] = &[
    "Alice",
    "Bob",
    "Mãe",
    "Tio João",
    "Иван",
    "村上",
    "🔥FireUser🔥",
    "+55 11 91234-5678",
];

const PHRASES: &[&str] = &[
    "bora fazer churrasco no domingo",
    "alguém viu minha chave",
    "chegando em cinco minutos",
    "feliz aniversário",
    "quem vai na praia amanhã",
    "kkkkkkkk",
    "see you tomorrow",
    "happy new year everyone",
];

const NOTICES: &[&str] = &["<Media omitted>", "<Mídia oculta>"];

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map_or("big_chat.txt", String::as_str);
    let year: i32 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(2024);

    println!("🧪 Transcript Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {count}");
    println!("   Output:   {output}");
    println!("   Year:     {year}");
    println!();

    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);
    let mut rng = rand::thread_rng();
    let start = std::time::Instant::now();
    let mut bytes_written: usize = 0;

    bytes_written += write_line(
        &mut writer,
        "Messages and calls are end-to-end encrypted. No one outside of this chat can read them.",
    )?;

    for i in 0..count {
        let author = AUTHORS.choose(&mut rng).copied().unwrap_or("Alice");
        let header = header(&mut rng, i, year, author);

        let body = if i % 25 == 7 {
            NOTICES.choose(&mut rng).copied().unwrap_or("<Media omitted>").to_string()
        } else {
            message_body(&mut rng, i)
        };

        bytes_written += write_line(&mut writer, &format!("{header}{body}"))?;

        // Occasionally insert lines the parser must tolerate
        if i % 1000 == 500 {
            bytes_written += write_line(&mut writer, garbage_line(&mut rng))?;
        }

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                bytes_written as f64 / 1_000_000.0,
                (i + 1) as f64 / elapsed
            );
        }
    }

    writer.flush()?;

    let elapsed = start.elapsed();
    println!("\n\n✅ Done!");
    println!("   Size: {:.2} MB", bytes_written as f64 / 1_000_000.0);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    Ok(())
}

fn write_line(writer: &mut impl Write, line: &str) -> io::Result<usize> {
    writer.write_all(line.as_bytes())?;
    writer.write_all(b"\n")?;
    Ok(line.len() + 1)
}

/// A valid header in one of the three export layouts, rotating by index.
fn header(rng: &mut impl Rng, index: usize, year: i32, author: &str) -> String {
    let month = (index / 28) % 12 + 1;
    let day = index % 28 + 1;
    let hour = rng.gen_range(0..24);
    let minute = rng.gen_range(0..60);

    match index % 3 {
        0 => format!("{day:02}/{month:02}/{year} {hour:02}:{minute:02} - {author}: "),
        1 => format!(
            "[{day:02}/{month:02}/{year}, {hour:02}:{minute:02}:{:02}] {author}: ",
            rng.gen_range(0..60)
        ),
        _ => {
            let meridiem = if hour < 12 { "AM" } else { "PM" };
            format!(
                "{day}/{month}/{:02}, {}:{minute:02} {meridiem} - {author}: ",
                year.rem_euclid(100),
                hour % 12
            )
        }
    }
}

fn message_body(rng: &mut impl Rng, index: usize) -> String {
    let phrase = PHRASES.choose(rng).copied().unwrap_or("oi");
    match index % 10 {
        0..=5 => phrase.to_string(),
        6 => {
            let emojis: String = (0..rng.gen_range(1..20))
                .filter_map(|_| EMOJIS.choose(rng).copied())
                .collect();
            format!("{phrase} {emojis}")
        }
        // Multi-line body; continuation lines never look like headers
        7 => format!("{phrase}\nsegunda linha\n\u{200E}terceira linha"),
        8 => format!("\u{200E}{} #{index}", phrase.to_uppercase()),
        _ => String::new(),
    }
}

fn garbage_line(rng: &mut impl Rng) -> &'static str {
    match rng.gen_range(0..4) {
        0 => "This line has no timestamp or author",
        1 => "-------------------------------------------",
        2 => "",
        _ => "☠️💀👻 Random emoji line 👻💀☠️",
    }
}
