use diplobot_core::LastReminderStore;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = LastReminderStore::open()?;
    let sent_at = store.read()?;
    if sent_at.timestamp() == 0 {
        println!("no reminder has been sent yet");
    } else {
        println!("last reminder sent on {}", sent_at.format("%d/%m/%y %H:%M UTC"));
    }
    Ok(())
}
