use clap::Args;
use diplobot_core::{
    run_check, Config, LastReminderStore, Mailer, ReminderPolicy, SmtpCredentials, TimeSource,
};

#[derive(Args)]
pub struct CheckArgs {
    /// How many days left before a reminder is sent
    #[arg(long, default_value = "1")]
    days_threshold: i64,
    /// How many days per game phase
    #[arg(long, default_value = "7")]
    phase_length_days: i64,
    /// Address the reminder is sent to
    #[arg(long)]
    recipient: String,
    /// Diplomacy game ID
    #[arg(long)]
    game_id: String,
}

pub fn run(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    // Credentials are a hard precondition; fail before touching the network.
    let credentials = SmtpCredentials::from_env()?;
    let mailer = Mailer::new(credentials, config.relay.clone());
    let store = LastReminderStore::open()?;

    let source = TimeSource::new(&config);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let time_left = runtime.block_on(source.time_left(&args.game_id))?;

    let policy = ReminderPolicy {
        days_threshold: args.days_threshold,
        phase_length_days: args.phase_length_days,
    };
    let outcome = run_check(
        policy,
        time_left.num_days(),
        &mailer,
        &store,
        &args.recipient,
        chrono::Utc::now(),
    )?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
