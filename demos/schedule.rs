use chrono::{DateTime, Duration, Utc};
use vocab_srs::{
    LegacyRecord, MemoryState, Scheduler, StoredRecord, from_legacy, to_legacy,
};

fn setup_logger() -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{} {}] {}", record.level(), record.target(), message))
        })
        .level(log::LevelFilter::Debug)
        .chain(std::io::stdout())
        .apply()?;
    Ok(())
}

fn due(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

fn schedule_new_card() -> Result<(), Box<dyn std::error::Error>> {
    let scheduler = Scheduler::default();
    let now = Utc::now().timestamp_millis();
    let card = MemoryState::new();

    // Preview what each button would do
    let next_states = scheduler.next_states(card, now);
    println!("重来 interval: {} days", next_states.again.interval);
    println!("困难 interval: {} days", next_states.hard.interval);
    println!("良好 interval: {} days", next_states.good.interval);
    println!("简单 interval: {} days", next_states.easy.interval);

    // The learner pressed "良好" via its keyboard shortcut
    let card = scheduler.review(card, "良好(C)", now)?;
    println!("Next review due: {}", due(card.next_review_at));
    println!("Memory state: {:?}", card);

    // A rating the scheduler does not know is rejected
    if let Err(err) = scheduler.review(card, "maybe", now) {
        println!("Rejected: {err}");
    }
    Ok(())
}

fn schedule_existing_card() -> Result<(), Box<dyn std::error::Error>> {
    let scheduler = Scheduler::default();
    let last_review = Utc::now() - Duration::days(7);

    // A card stored by the old ease/interval scheduler
    let legacy = LegacyRecord {
        next_review_at: Utc::now().timestamp_millis(),
        interval_minutes: 7 * 1440,
        ease: Some(2.5),
        last_reviewed_at: last_review.timestamp_millis(),
        repetitions: 4,
    };

    // Kept in its own shape, it is scheduled in minutes
    let record = StoredRecord::Legacy(legacy);
    let rescheduled = scheduler.review_record(record, "困难".parse()?, Utc::now().timestamp_millis());
    println!("Legacy strategy ({}): {:?}", record.strategy(), rescheduled);

    // Upgraded, it moves to the memory model
    let card = from_legacy(&legacy);
    let card = scheduler.review(card, "重来", Utc::now().timestamp_millis())?;
    println!("Upgraded card after a lapse: {:?}", card);
    println!("Stored back in the old shape: {:?}", to_legacy(&card));
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger()?;

    println!("Scheduling a new card:");
    schedule_new_card()?;

    println!("\nScheduling an existing card:");
    schedule_existing_card()?;

    Ok(())
}
