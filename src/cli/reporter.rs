// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::comparison::ComparisonTable;
use crate::evaluation::{AccessPath, BatchReport, EvaluationResult, MetricSummary};
use crate::store::CollectionInfo;
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report one artifact's scores
    pub fn report_result(result: &EvaluationResult) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!(
            "{} {} {}",
            "Artifact:".bold(),
            result.artifact.display_name.cyan(),
            format!("[{}]", result.artifact.collection).bright_black()
        );
        println!("{}", "━".repeat(80).bright_black());

        match &result.access {
            AccessPath::Full => println!("  {} full", "Mode:".bright_black()),
            AccessPath::Basic => println!("  {} basic", "Mode:".bright_black()),
            AccessPath::BasicFallback { reason } => println!(
                "  {} {} {}",
                "Mode:".bright_black(),
                "basic (fallback)".yellow(),
                reason.bright_black()
            ),
            AccessPath::Unavailable { reason } => println!(
                "  {} {} {}",
                "Mode:".bright_black(),
                "unavailable".red(),
                reason.bright_black()
            ),
        }

        let metrics = &result.metrics;
        println!("\n{}", "Scores:".bold());
        Self::print_score(
            &format!("Geometric accuracy ({:?})", metrics.geometric_accuracy.kind),
            metrics.geometric_accuracy.score,
        );
        Self::print_score("Interaction quality", metrics.interaction_quality.score);
        Self::print_score("CH suitability", metrics.ch_suitability.score);

        let perf = &metrics.performance;
        println!("\n{}", "Performance:".bold());
        println!(
            "  {} {:>10} | {} {:>+9.2} MB | {} {}{}",
            "Load:".bright_black(),
            Self::format_duration(Duration::from_secs_f64(perf.load_time_seconds.max(0.0)))
                .yellow(),
            "Memory:".bright_black(),
            perf.memory_delta_mb,
            "Triangles:".bright_black(),
            perf.triangle_count.to_string().cyan(),
            if perf.triangle_count_estimated { " (est.)" } else { "" }
        );
        println!(
            "  {} {:.1} | {} {:.3}",
            "FPS estimate:".bright_black(),
            perf.fps_estimate,
            "Score:".bright_black(),
            perf.performance_score
        );
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report batch counts and mean ± std per metric
    pub fn report_batch(report: &BatchReport) {
        println!("\n{}", "Batch Summary".bold());
        println!("{}", "━".repeat(80).bright_black());
        println!(
            "  {} {}   {} {}   {} {}   ({:.1}%)",
            "Total:".bright_black(),
            report.total_models,
            "Evaluated:".bright_black(),
            report.evaluated_models.to_string().green(),
            "Failed:".bright_black(),
            if report.failed_models > 0 {
                report.failed_models.to_string().red()
            } else {
                report.failed_models.to_string().normal()
            },
            report.success_rate()
        );

        match &report.summary {
            Some(summary) => {
                println!();
                for (name, stats) in summary.metrics() {
                    Self::print_summary(name, stats);
                }
            }
            None => println!("\n  {}", "No artifacts evaluated successfully".yellow()),
        }

        if !report.failures.is_empty() {
            println!("\n{}", "Failed Artifacts:".bold());
            for failure in &report.failures {
                println!("  {} {}", "❌".red(), failure);
            }
        }
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report collections and their artifact counts
    pub fn report_status(collections: &[CollectionInfo]) {
        let total: usize = collections.iter().map(|c| c.artifact_count).sum();
        println!("\n{}", "Artifact Store".bold());
        println!("{}", "━".repeat(80).bright_black());
        for collection in collections {
            println!(
                "  {:<40} {:>8}",
                collection.name.cyan(),
                collection.artifact_count
            );
        }
        println!(
            "\n  {} {} collections, {} artifacts",
            "Total:".bright_black(),
            collections.len(),
            total
        );
    }

    /// Report the baseline comparison table
    pub fn report_baseline(table: &ComparisonTable) {
        println!(
            "\n{:<24} {:>10} {:>12} {:>12} {:>10}",
            "Technique".bold(),
            "Accuracy".bold(),
            "Performance".bold(),
            "Interaction".bold(),
            "CH".bold()
        );
        println!("{}", "━".repeat(72).bright_black());
        for (technique, scores) in table {
            println!(
                "{:<24} {:>10.2} {:>12.1} {:>12.2} {:>10.2}",
                technique.as_str().cyan(),
                scores.geometric_accuracy,
                scores.performance_score,
                scores.interaction_quality,
                scores.ch_suitability
            );
        }
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }

    fn print_score(name: &str, score: f64) {
        let value = format!("{:.3}", score);
        let formatted = if score >= 0.8 {
            value.green()
        } else if score >= 0.5 {
            value.yellow()
        } else {
            value.red()
        };
        println!("  {} {}", format!("{}:", name).bright_black(), formatted);
    }

    fn print_summary(name: &str, stats: &MetricSummary) {
        println!(
            "  {:<22} {} ± {}  {}",
            format!("{}:", name).bright_black(),
            format!("{:.3}", stats.mean).cyan(),
            format!("{:.3}", stats.std).bright_black(),
            format!("[{:.3}, {:.3}]", stats.min, stats.max).bright_black()
        );
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }
}
