//! Rate-limit status display.

use super::context::AppContext;
use gmb_writer::GmbResult;

/// Print remaining quota, cooldown and window countdowns.
pub fn show_status(context: &AppContext) -> GmbResult<()> {
    let limiter = &context.limiter;
    let remaining = limiter.remaining_time();
    let daily_remaining = limiter.check().daily_remaining();
    let limit = limiter.policy().daily_limit();

    println!("Profile:         {}", context.profile_path.display());
    println!(
        "API key:         {}",
        if context.profile.has_api_key()? {
            "configured"
        } else {
            "not set (example content)"
        }
    );
    println!("Daily remaining: {}/{}", daily_remaining, limit);
    if remaining.cooldown_ms > 0 {
        println!("Cooldown:        {}s", remaining.cooldown_ms.div_ceil(1_000));
    } else {
        println!("Cooldown:        ready");
    }
    println!("Window resets:   {}", format_countdown(remaining.daily_window_ms));
    println!("Generated total: {}", limiter.snapshot().count);

    Ok(())
}

/// `HHh MMm` rendering of a millisecond countdown.
fn format_countdown(ms: u64) -> String {
    let minutes = ms.div_ceil(60_000);
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}
