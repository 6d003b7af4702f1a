//! Scripted input sequences replayed one tick at a time.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Errors raised while loading an input script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// The script file could not be read.
    #[error("failed to read script {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The script is not valid RON.
    #[error("failed to parse script: {0}")]
    Parse(#[source] ron::error::SpannedError),
}

/// One segment of the script: the same samples repeated for `ticks` ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    /// How many ticks this step lasts.
    pub ticks: u32,
    /// Move sample `[strafe, forward]`.
    #[serde(default)]
    pub move_input: [f32; 2],
    /// Look sample `[yaw delta, pitch delta]` before sensitivity is applied.
    #[serde(default)]
    pub look_input: [f32; 2],
    /// Shown in logs when the step begins.
    #[serde(default)]
    pub label: Option<String>,
}

impl ScriptStep {
    fn new(label: &str, ticks: u32, move_input: [f32; 2], look_input: [f32; 2]) -> Self {
        Self {
            ticks,
            move_input,
            look_input,
            label: Some(label.to_string()),
        }
    }
}

/// An ordered list of [`ScriptStep`]s.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputScript {
    pub steps: Vec<ScriptStep>,
}

impl InputScript {
    /// Parse a script from RON text.
    pub fn from_ron(s: &str) -> Result<Self, ScriptError> {
        ron::from_str(s).map_err(ScriptError::Parse)
    }

    /// Read and parse a script file.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&contents)
    }

    /// Walk forward, hit both pitch limits, turn 90° right, strafe, then settle.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            steps: vec![
                ScriptStep::new("walk forward", 30, [0.0, 1.0], [0.0, 0.0]),
                ScriptStep::new("look up past limit", 1, [0.0, 0.0], [0.0, 100.0]),
                ScriptStep::new("look down past limit", 1, [0.0, 0.0], [0.0, -200.0]),
                ScriptStep::new("turn right", 9, [0.0, 0.0], [10.0, 0.0]),
                ScriptStep::new("strafe right", 30, [1.0, 0.0], [0.0, 0.0]),
                ScriptStep::new("settle", 20, [0.0, 0.0], [0.0, 0.0]),
            ],
        }
    }

    /// Sum of all step durations.
    #[must_use]
    pub fn total_ticks(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.ticks)).sum()
    }
}

/// Cursor over an [`InputScript`].
#[derive(Debug, Clone)]
pub struct Playback {
    script: InputScript,
    step: usize,
    ticks_into_step: u32,
    ticks_played: u64,
}

impl Playback {
    #[must_use]
    pub fn new(script: InputScript) -> Self {
        let mut playback = Self {
            script,
            step: 0,
            ticks_into_step: 0,
            ticks_played: 0,
        };
        playback.skip_played_steps();
        playback
    }

    /// Move past steps with no ticks left, so `step` always points at a
    /// playable step or past the end.
    fn skip_played_steps(&mut self) {
        while let Some(step) = self.script.steps.get(self.step) {
            if self.ticks_into_step < step.ticks {
                break;
            }
            self.step += 1;
            self.ticks_into_step = 0;
        }
    }

    /// Whether every step has been played.
    ///
    /// True as soon as the last tick has been handed out.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.step >= self.script.steps.len()
    }

    #[must_use]
    pub fn ticks_played(&self) -> u64 {
        self.ticks_played
    }

    /// Samples for the next tick as `(move, look)`, or `None` once the script is done.
    ///
    /// The second value is the label of the step when this tick starts it.
    pub fn next_sample(&mut self) -> Option<((Vec2, Vec2), Option<&str>)> {
        let index = self.step;
        let step = self.script.steps.get(index)?;
        let sample = (Vec2::from(step.move_input), Vec2::from(step.look_input));
        let starting = self.ticks_into_step == 0;

        self.ticks_into_step += 1;
        self.ticks_played += 1;
        self.skip_played_steps();

        let label = self
            .script
            .steps
            .get(index)
            .and_then(|s| s.label.as_deref())
            .filter(|_| starting);
        Some((sample, label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_script_shape() {
        let script = InputScript::builtin();
        assert_eq!(script.steps.len(), 6);
        assert_eq!(script.total_ticks(), 91);
    }

    #[test]
    fn test_parse_with_defaults() {
        let script = InputScript::from_ron(
            r#"(steps: [
                (ticks: 2, move_input: (0.0, 1.0)),
                (ticks: 1, look_input: (5.0, -3.0), label: Some("peek")),
            ])"#,
        )
        .unwrap();
        assert_eq!(script.steps[0].look_input, [0.0, 0.0]);
        assert_eq!(script.steps[1].move_input, [0.0, 0.0]);
        assert_eq!(script.steps[1].label.as_deref(), Some("peek"));
    }

    #[test]
    fn test_parse_error_reported() {
        assert!(matches!(
            InputScript::from_ron("(steps: [(ticks: -1)])"),
            Err(ScriptError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = InputScript::load(Path::new("/nonexistent/script.ron")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/script.ron"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s.ron");
        std::fs::write(&path, "(steps: [(ticks: 3)])").unwrap();
        let script = InputScript::load(&path).unwrap();
        assert_eq!(script.total_ticks(), 3);
    }

    #[test]
    fn test_playback_walks_steps_in_order() {
        let script = InputScript {
            steps: vec![
                ScriptStep::new("a", 2, [0.0, 1.0], [0.0, 0.0]),
                ScriptStep::new("empty", 0, [9.0, 9.0], [9.0, 9.0]),
                ScriptStep::new("b", 1, [0.0, 0.0], [10.0, 0.0]),
            ],
        };
        let mut playback = Playback::new(script);

        let (s, label) = playback.next_sample().unwrap();
        assert_eq!(s, (Vec2::Y, Vec2::ZERO));
        assert_eq!(label, Some("a"));

        let (_, label) = playback.next_sample().unwrap();
        assert_eq!(label, None);

        let (s, label) = playback.next_sample().unwrap();
        assert_eq!(s, (Vec2::ZERO, Vec2::new(10.0, 0.0)));
        assert_eq!(label, Some("b"));

        assert!(playback.is_finished());
        assert!(playback.next_sample().is_none());
        assert_eq!(playback.ticks_played(), 3);
    }

    #[test]
    fn test_finished_right_after_last_tick() {
        let script = InputScript {
            steps: vec![ScriptStep::new("only", 10, [0.0, 1.0], [0.0, 0.0])],
        };
        let mut playback = Playback::new(script);
        let mut samples = 0;
        while !playback.is_finished() {
            assert!(playback.next_sample().is_some());
            samples += 1;
        }
        assert_eq!(samples, 10);
        assert_eq!(playback.ticks_played(), 10);
    }

    #[test]
    fn test_empty_script_is_finished() {
        let playback = Playback::new(InputScript::default());
        assert!(playback.is_finished());
    }

    #[test]
    fn test_zero_tick_steps_only_is_finished() {
        let script = InputScript {
            steps: vec![ScriptStep::new("skip", 0, [1.0, 0.0], [0.0, 0.0])],
        };
        let mut playback = Playback::new(script);
        assert!(playback.is_finished());
        assert!(playback.next_sample().is_none());
    }
}
