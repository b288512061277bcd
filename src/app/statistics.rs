//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{FailureKind, VerdictStats};
use crate::models::{Flag, Verdict};

/// Logs the verdict, flag and resolution failure counts of a run.
pub fn print_verdict_statistics(source: &str, stats: &VerdictStats, elapsed_seconds: f64) {
    let total = stats.total();
    info!(
        "Checked {} URL{} from {} in {:.1}s",
        total,
        if total == 1 { "" } else { "s" },
        source,
        elapsed_seconds
    );

    for verdict in Verdict::iter() {
        let count = stats.verdict_count(verdict);
        if count > 0 {
            info!("   {}: {}", verdict, count);
        }
    }

    for flag in Flag::iter() {
        let count = stats.flag_count(flag);
        if count > 0 {
            info!("   {}: {}", flag, count);
        }
    }

    let total_failures = stats.total_failures();
    if total_failures > 0 {
        info!("Resolution failures ({} total):", total_failures);
        for kind in FailureKind::iter() {
            let count = stats.failure_count(kind);
            if count > 0 {
                info!("   {}: {}", kind.as_str(), count);
            }
        }
    }
}
