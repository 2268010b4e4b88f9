use std::cell::RefCell;
use std::io::Read;
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result};
use serde::Serialize;

use sticky_core::{
    AppConfig, ContentToggle, NoopHaptics, PullDirection, Sample, StickyInteraction,
    TransitionState,
};

/// Outcome of replaying a sample script
#[derive(Debug, Serialize)]
pub struct Report {
    /// State after each sample
    pub states: Vec<TransitionState>,
    /// Every observer invocation, in order
    pub callbacks: Vec<TransitionState>,
    /// Completed content swaps (toggle mode only)
    pub toggles: u32,
    pub final_state: TransitionState,
}

pub fn run(
    config: &AppConfig,
    file: Option<&Path>,
    direction: PullDirection,
    toggle: bool,
    json: bool,
) -> Result<()> {
    let input = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let samples: Vec<Sample> =
        serde_json::from_str(&input).context("Samples must be a JSON array")?;
    tracing::debug!("Replaying {} samples", samples.len());

    let report = if toggle {
        replay_toggle(config, &samples)
    } else {
        replay_interaction(config, direction, &samples)
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for (i, (sample, state)) in samples.iter().zip(&report.states).enumerate() {
        let input = match sample {
            Sample::Offset(value) => format!("offset {:>8.1}", value),
            Sample::Velocity(v) => format!("velocity dy {:>5.1}", v.dy),
        };
        println!("  {:>3}  {:<20} -> {}", i, input, state);
    }
    println!();
    println!("Final state: {}", report.final_state);
    println!("Callbacks: {}", report.callbacks.len());
    if toggle {
        println!("Toggles: {}", report.toggles);
    }

    Ok(())
}

/// Feed samples to one interaction
pub fn replay_interaction(
    config: &AppConfig,
    direction: PullDirection,
    samples: &[Sample],
) -> Report {
    let callbacks = Rc::new(RefCell::new(Vec::new()));
    let sink = callbacks.clone();
    let mut interaction = StickyInteraction::new(direction, "Reveal", move |state| {
        sink.borrow_mut().push(state);
    })
    .with_threshold(config.interaction.threshold);

    let states = samples
        .iter()
        .map(|sample| {
            interaction.handle_sample(*sample);
            interaction.state()
        })
        .collect();

    let callbacks = callbacks.borrow().clone();
    Report {
        states,
        callbacks,
        toggles: 0,
        final_state: interaction.state(),
    }
}

/// Feed samples to the two-page toggle
pub fn replay_toggle(config: &AppConfig, samples: &[Sample]) -> Report {
    let callbacks = Rc::new(RefCell::new(Vec::new()));
    let sink = callbacks.clone();
    let mut toggle = ContentToggle::from_config(config, Rc::new(NoopHaptics))
        .with_observer(move |state| sink.borrow_mut().push(state));

    let states = samples
        .iter()
        .map(|sample| {
            if let Some(request) = toggle.handle_sample(*sample) {
                tracing::info!(
                    "Swap to {} ({:?}, {}ms)",
                    toggle.current_page().title,
                    request.easing,
                    request.duration.as_millis()
                );
            }
            toggle.interaction().state()
        })
        .collect();

    let callbacks = callbacks.borrow().clone();
    Report {
        states,
        callbacks,
        toggles: toggle.toggle_count(),
        final_state: toggle.interaction().state(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sticky_core::ScrollVelocity;

    #[test]
    fn test_offset_script_pull_down() {
        let samples = [
            Sample::Offset(0.0),
            Sample::Offset(50.0),
            Sample::Offset(140.0),
            Sample::Offset(140.0),
        ];
        let report = replay_interaction(&AppConfig::default(), PullDirection::PullDown, &samples);
        assert_eq!(
            report.states,
            vec![
                TransitionState::Pull,
                TransitionState::Pull,
                TransitionState::Release,
                TransitionState::Release,
            ]
        );
        assert_eq!(report.callbacks, vec![TransitionState::Release]);
        assert_eq!(report.final_state, TransitionState::Release);
    }

    #[test]
    fn test_release_script() {
        let samples: Vec<Sample> = serde_json::from_str(
            r#"[{"offset": -200.0}, {"velocity": {"dx": 0.0, "dy": -1.0}}, {"velocity": {"dy": 1.0}}]"#,
        )
        .unwrap();
        let report = replay_interaction(&AppConfig::default(), PullDirection::PullUp, &samples);
        assert_eq!(
            report.states,
            vec![
                TransitionState::Release,
                TransitionState::Release,
                TransitionState::Released,
            ]
        );
        assert_eq!(report.final_state, TransitionState::Released);
    }

    #[test]
    fn test_toggle_script_counts_swaps() {
        let samples = [
            Sample::Offset(-150.0),
            Sample::Velocity(ScrollVelocity::vertical(2.0)),
            Sample::Offset(150.0),
            Sample::Velocity(ScrollVelocity::vertical(-2.0)),
        ];
        let report = replay_toggle(&AppConfig::default(), &samples);
        assert_eq!(report.toggles, 2);
        assert_eq!(
            report.states,
            vec![
                TransitionState::Release,
                TransitionState::Pull,
                TransitionState::Release,
                TransitionState::Pull,
            ]
        );
        assert_eq!(report.callbacks.len(), 4);
    }

    #[test]
    fn test_report_serializes() {
        let report = replay_interaction(&AppConfig::default(), PullDirection::PullDown, &[]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["final_state"], "pull");
        assert_eq!(json["toggles"], 0);
    }
}
