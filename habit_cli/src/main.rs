use chrono::{Datelike, Local, Utc, Weekday};
use clap::{Parser, Subcommand};
use habit_core::schedule::weekday_code;
use habit_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "habitmetrics")]
#[command(about = "Habit dashboard metrics: wellness, streaks and mood insights", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a wellness score
    Wellness {
        #[arg(allow_negative_numbers = true)]
        score: i64,
    },

    /// Show the best streak and the top streak list
    Streaks {
        /// How many streaks to list
        #[arg(long)]
        top: Option<usize>,
    },

    /// List habits grouped by category
    Habits {
        /// Weekday to check schedules against (Mon..Sun, default today)
        #[arg(long, value_parser = parse_weekday)]
        day: Option<Weekday>,
    },

    /// Wellness, quick stats, top streaks and today's habits
    Dashboard {
        /// Weekday to check schedules against (Mon..Sun, default today)
        #[arg(long, value_parser = parse_weekday)]
        day: Option<Weekday>,
    },

    /// Mood journal
    Mood {
        #[command(subcommand)]
        action: MoodCommand,
    },
}

#[derive(Subcommand)]
enum MoodCommand {
    /// Log a mood (great, good, okay, bad, terrible)
    Log {
        mood: String,

        /// Free-text notes, scanned for habit impact
        #[arg(long, default_value = "")]
        notes: String,

        /// Print the request without writing to the journal
        #[arg(long)]
        dry_run: bool,
    },

    /// Summarize recent mood entries
    Insights {
        /// Number of recent entries to include
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Trim the journal to the most recent entries
    Compact {
        /// Number of entries to keep
        #[arg(long)]
        keep: Option<usize>,
    },
}

fn main() -> Result<()> {
    habit_core::logging::init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let today = Local::now().weekday();

    match cli.command {
        Commands::Wellness { score } => cmd_wellness(score),
        Commands::Streaks { top } => {
            cmd_streaks(&data_dir, top.unwrap_or(config.display.top_streaks))
        }
        Commands::Habits { day } => cmd_habits(&data_dir, day.unwrap_or(today)),
        Commands::Dashboard { day } => cmd_dashboard(&data_dir, day.unwrap_or(today), &config),
        Commands::Mood { action } => {
            let mut journal = JsonlMoodJournal::new(journal_path(&data_dir));
            match action {
                MoodCommand::Log {
                    mood,
                    notes,
                    dry_run,
                } => cmd_mood_log(&mut journal, &mood, notes, dry_run),
                MoodCommand::Insights { limit } => {
                    cmd_mood_insights(&journal, limit.unwrap_or(config.mood.history_limit))
                }
                MoodCommand::Compact { keep } => {
                    cmd_mood_compact(&mut journal, keep.unwrap_or(config.mood.history_limit))
                }
            }
        }
    }
}

fn parse_weekday(s: &str) -> std::result::Result<Weekday, String> {
    s.parse::<Weekday>()
        .map_err(|_| format!("invalid weekday '{}', expected Mon..Sun", s))
}

fn journal_path(data_dir: &Path) -> PathBuf {
    data_dir.join("mood").join("journal.jsonl")
}

fn cmd_wellness(score: i64) -> Result<()> {
    display_wellness(score);
    Ok(())
}

fn cmd_streaks(data_dir: &Path, top: usize) -> Result<()> {
    let records = DataDir::new(data_dir)
        .load_streaks()
        .map(StreakPayload::into_records)
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to load streaks: {}. Showing none.", e);
            Vec::new()
        });

    println!("Best streak: {} days", best_streak(&records));
    println!();
    display_top_streaks(&records, top);
    Ok(())
}

fn cmd_habits(data_dir: &Path, today: Weekday) -> Result<()> {
    let habits = DataDir::new(data_dir).load_habits().unwrap_or_else(|e| {
        tracing::warn!("Failed to load habits: {}. Showing none.", e);
        Vec::new()
    });

    let groups = group_by_category(&habits);
    if groups.is_empty() {
        println!("No habits yet. Create one to get started!");
        return Ok(());
    }

    println!("Habits for {}", weekday_code(today));
    for (category, habits) in groups.iter() {
        println!();
        println!("[{}]", category);
        for habit in habits {
            let goal: String = habit.goal_type.clone().into();
            match habit.schedule_label(today) {
                Some(label) => println!("  - {} ({})  {}", habit.title, goal, label),
                None => println!("  - {} ({})", habit.title, goal),
            }
        }
    }
    Ok(())
}

fn cmd_dashboard(data_dir: &Path, today: Weekday, config: &Config) -> Result<()> {
    let snapshot = DataDir::new(data_dir).snapshot();

    display_wellness(snapshot.wellness_score);

    let stats = snapshot.quick_stats();
    println!("── Quick Stats ──────────────────────────");
    println!("  Total Habits: {}", stats.total_habits);
    println!("  Logged Today: {}", stats.logged_today);
    println!("  Best Streak:  {} days", stats.best_streak);
    println!();

    println!("── Top Streaks ──────────────────────────");
    display_top_streaks(&snapshot.streaks, config.display.top_streaks);
    println!();

    println!("── Today's Habits ({}) ─────────────────", weekday_code(today));
    let todays = loggable_today(&snapshot.habits, today);
    if todays.is_empty() {
        println!("  Nothing scheduled today.");
    }
    for habit in todays {
        let mark = if habit.logged_today { "✓" } else { " " };
        let category = habit.category_key().unwrap_or("General");
        println!("  [{}] {} · {}", mark, habit.title, category);
    }
    Ok(())
}

fn cmd_mood_log(
    journal: &mut JsonlMoodJournal,
    mood: &str,
    notes: String,
    dry_run: bool,
) -> Result<()> {
    let mood = Mood::parse(mood).ok_or_else(|| {
        Error::InvalidInput(format!(
            "unknown mood '{}', expected great, good, okay, bad or terrible",
            mood
        ))
    })?;

    if dry_run {
        let request = MoodLogRequest::new(mood, notes);
        println!("{}", serde_json::to_string_pretty(&request)?);
        println!("\n[Dry run - not logging mood]");
        return Ok(());
    }

    let entry = MoodEntry::new(mood, notes, Utc::now());
    journal.append(&entry)?;

    let impact = entry.habit_impact.unwrap_or(ImpactCategory::General);
    println!("✓ Mood logged: {} {}", entry.mood.emoji(), entry.mood.as_str());
    println!("  Impact: {}", impact.headline());
    Ok(())
}

fn cmd_mood_insights(journal: &JsonlMoodJournal, limit: usize) -> Result<()> {
    let history = journal.recent(limit)?;
    let insights = summarize(&history);

    if insights.is_empty() {
        println!("No mood entries yet. Log one with `habitmetrics mood log <MOOD>`.");
        return Ok(());
    }

    for insight in insights {
        println!(
            "{} {}: {}  ({})",
            insight.emoji, insight.label, insight.value, insight.description
        );
    }
    Ok(())
}

fn cmd_mood_compact(journal: &mut JsonlMoodJournal, keep: usize) -> Result<()> {
    if keep == 0 {
        return Err(Error::InvalidInput(
            "keep must be at least 1, compacting to zero would erase the journal".into(),
        ));
    }

    let dropped = journal.compact(keep)?;
    if dropped == 0 {
        println!("Mood journal already within {} entries.", keep);
    } else {
        println!("✓ Compacted mood journal: dropped {} entries", dropped);
    }
    Ok(())
}

fn display_wellness(score: i64) {
    let status = classify(score);

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  WELLNESS SCORE: {}%", score);
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Status: {}", status.tier.label());
    println!("  Trend:  {}", status.trend.icon());
    println!("  Color:  {}", status.color_token);
    if let Some(warning) = status.warning() {
        println!();
        println!("  ⚠ {}", warning);
    }
    println!();
}

fn display_top_streaks(records: &[Option<StreakRecord>], top: usize) {
    let top = top_streaks(records, top);
    if top.is_empty() {
        println!("  Start logging habits to build streaks!");
        return;
    }
    for record in top {
        println!("  {} — {} 🔥", record.display_title(), record.count());
    }
}
