// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — GV Runtime Guard Synthetic Agent Loop
// ─────────────────────────────────────────────────────────────────────
//! Seeded synthetic agent loop for eyeballing guard dynamics.
//!
//! Three phases of telemetry (normal, escalating, runaway) are drawn
//! from fixed integer ranges and fed to one guard. Each step prints a
//! 100-column bar of the score with its band and action.

use std::io::{self, Write};
use std::ops::RangeInclusive;
use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use gvguard_core::RiskAccumulator;
use gvguard_types::{Decision, GuardConfig, TelemetrySample};

const BAR_WIDTH: usize = 100;

struct Phase {
    title: &'static str,
    steps: usize,
    tokens: RangeInclusive<u32>,
    tool_calls: RangeInclusive<u32>,
    errors: RangeInclusive<u32>,
    repeats: RangeInclusive<u32>,
    depth: RangeInclusive<u32>,
}

impl Phase {
    fn sample(&self, rng: &mut StdRng) -> TelemetrySample {
        TelemetrySample {
            token_delta: rng.gen_range(self.tokens.clone()) as f64,
            tool_calls_delta: rng.gen_range(self.tool_calls.clone()) as f64,
            error_delta: rng.gen_range(self.errors.clone()) as f64,
            repeated_action_delta: rng.gen_range(self.repeats.clone()) as f64,
            recursion_depth: rng.gen_range(self.depth.clone()) as f64,
            latency_ms: None,
        }
    }
}

fn phases() -> [Phase; 3] {
    [
        Phase {
            title: "Phase 1: normal operation",
            steps: 5,
            tokens: 50..=120,
            tool_calls: 0..=1,
            errors: 0..=0,
            repeats: 0..=0,
            depth: 0..=0,
        },
        Phase {
            title: "Phase 2: escalating instability",
            steps: 6,
            tokens: 400..=900,
            tool_calls: 2..=4,
            errors: 0..=1,
            repeats: 1..=3,
            depth: 1..=3,
        },
        Phase {
            title: "Phase 3: runaway behavior",
            steps: 6,
            tokens: 900..=1500,
            tool_calls: 4..=7,
            errors: 1..=2,
            repeats: 3..=6,
            depth: 3..=6,
        },
    ]
}

fn status_line(decision: &Decision) -> String {
    let filled = (decision.score.max(0.0) as usize).min(BAR_WIDTH);
    let bar = format!("{}{}", "█".repeat(filled), "-".repeat(BAR_WIDTH - filled));
    format!(
        "GV [{bar}] {:6.2}  |  {:<6}  |  action: {}",
        decision.score,
        decision.band.as_str().to_uppercase(),
        decision.recommended_action
    )
}

/// Run all phases against one guard and return every decision.
pub fn run<W: Write>(
    config: GuardConfig,
    seed: u64,
    delay: Duration,
    out: &mut W,
) -> io::Result<Vec<Decision>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut guard = RiskAccumulator::new(config);
    let mut decisions = Vec::new();

    tracing::info!(seed, "starting simulated agent loop");
    for phase in phases() {
        writeln!(out, "\n{}\n", phase.title)?;
        for _ in 0..phase.steps {
            let decision = guard.step(&phase.sample(&mut rng));
            writeln!(out, "{}", status_line(&decision))?;
            decisions.push(decision);
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }
    }
    writeln!(out, "\nSimulation complete.")?;
    out.flush()?;
    Ok(decisions)
}

#[cfg(test)]
mod tests {
    use gvguard_types::{Action, RiskBand};

    use super::*;

    fn simulate(seed: u64) -> (Vec<Decision>, String) {
        let mut out = Vec::new();
        let decisions = run(GuardConfig::default(), seed, Duration::ZERO, &mut out).unwrap();
        (decisions, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_runs_all_phases() {
        let (decisions, out) = simulate(1);
        assert_eq!(decisions.len(), 17);
        assert_eq!(out.matches("GV [").count(), 17);
        assert!(out.contains("Phase 3: runaway behavior"));
        assert_eq!(decisions.last().unwrap().step_count, 17);
    }

    #[test]
    fn test_runaway_ends_red() {
        for seed in [0, 7, 42, 1234] {
            let (decisions, _) = simulate(seed);
            let last = decisions.last().unwrap();
            assert_eq!(last.band, RiskBand::Red, "seed {seed}");
            assert_eq!(last.recommended_action, Action::Halt);
        }
    }

    #[test]
    fn test_normal_phase_stays_green() {
        let (decisions, _) = simulate(3);
        assert!(decisions[..5].iter().all(|d| d.band == RiskBand::Green));
    }

    #[test]
    fn test_same_seed_same_output() {
        assert_eq!(simulate(9).1, simulate(9).1);
    }

    #[test]
    fn test_status_line_bar_width() {
        let (decisions, _) = simulate(5);
        let line = status_line(&decisions[10]);
        let bar: String = line
            .chars()
            .skip_while(|c| *c != '[')
            .skip(1)
            .take_while(|c| *c != ']')
            .collect();
        assert_eq!(bar.chars().count(), BAR_WIDTH);
    }
}
