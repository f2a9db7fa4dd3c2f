// game.rs - Timed render/step loop

use std::time::Duration;

use anyhow::{Context, Result};
use conway::{CycleDetector, FrameSink, Generation, Grid, GridConfig};
use tracing::{debug, info};

/// Everything the loop needs, gathered from the command line.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub grid: GridConfig,
    /// Pause between one generation and the next.
    pub rate: Duration,
    /// Last generation to render; `None` runs until interrupted.
    pub generations: Option<u64>,
    pub halt_on_cycle: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    GenerationLimit,
    Cycle,
}

/// How a finished run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Index of the last generation rendered.
    pub generation: u64,
    pub reason: StopReason,
}

pub struct Game<S: FrameSink> {
    config: GameConfig,
    sink: S,
}

impl<S: FrameSink> Game<S> {
    pub fn new(config: GameConfig, sink: S) -> Self {
        Self { config, sink }
    }

    #[cfg(test)]
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Clear, render, sleep, step; repeat.
    ///
    /// Only returns when a generation limit or (with `halt_on_cycle`) a
    /// repeated state stops the run. Stepping is synchronous, so a caller
    /// racing this future against a signal can only cancel it between steps.
    pub async fn run(&mut self) -> Result<Outcome> {
        let grid = Grid::initialize(&self.config.grid)?;
        info!(
            width = grid.width(),
            height = grid.height(),
            rate = ?self.config.rate,
            "starting"
        );

        let mut generation = Generation::new(grid);
        let mut detector = CycleDetector::new();
        loop {
            self.sink.clear_screen().context("clearing screen")?;
            self.sink
                .write_frame(&generation.frame())
                .context("writing frame")?;
            debug!(
                generation = generation.index(),
                population = generation.grid().population(),
                "rendered"
            );

            if detector.observe(generation.grid()) {
                info!(generation = generation.index(), "grid repeats a recent state");
                if self.config.halt_on_cycle {
                    return Ok(self.stop(&generation, StopReason::Cycle));
                }
            }
            if self.config.generations == Some(generation.index()) {
                return Ok(self.stop(&generation, StopReason::GenerationLimit));
            }

            tokio::time::sleep(self.config.rate).await;
            generation.advance();
        }
    }

    fn stop(&self, generation: &Generation, reason: StopReason) -> Outcome {
        info!(generation = generation.index(), ?reason, "stopping");
        Outcome { generation: generation.index(), reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conway::sink::CLEAR_SCREEN;
    use conway::{Cell, SeedPolicy, TermSink};

    const O: Cell = Cell::Alive;
    const D: Cell = Cell::Dead;

    fn config(grid: GridConfig, generations: Option<u64>, halt_on_cycle: bool) -> GameConfig {
        GameConfig { grid, rate: Duration::ZERO, generations, halt_on_cycle }
    }

    fn frames(game: Game<TermSink<Vec<u8>>>) -> Vec<String> {
        let out = String::from_utf8(game.into_sink().into_inner()).unwrap();
        out.split(CLEAR_SCREEN).skip(1).map(str::to_owned).collect()
    }

    #[tokio::test]
    async fn renders_each_generation_up_to_the_limit() {
        let grid = GridConfig::new(3, 1, SeedPolicy::Fixed(vec![O, O, O]));
        let mut game = Game::new(config(grid, Some(2), false), TermSink::new(Vec::new()));

        let outcome = game.run().await.unwrap();
        assert_eq!(outcome, Outcome { generation: 2, reason: StopReason::GenerationLimit });
        assert_eq!(
            frames(game),
            ["Generation 0\no o o\n", "Generation 1\n  o  \n", "Generation 2\n     \n"]
        );
    }

    #[tokio::test]
    async fn limit_of_zero_renders_only_the_seed() {
        let grid = GridConfig::new(2, 2, SeedPolicy::Fixed(vec![O, D, D, O]));
        let mut game = Game::new(config(grid, Some(0), false), TermSink::new(Vec::new()));

        game.run().await.unwrap();
        assert_eq!(frames(game), ["Generation 0\no  \n  o\n"]);
    }

    #[tokio::test]
    async fn halts_when_blinker_repeats() {
        let grid = GridConfig::new(3, 3, SeedPolicy::Fixed(vec![D, D, D, O, O, O, D, D, D]));
        let mut game = Game::new(config(grid, None, true), TermSink::new(Vec::new()));

        let outcome = game.run().await.unwrap();
        assert_eq!(outcome, Outcome { generation: 2, reason: StopReason::Cycle });
        assert_eq!(frames(game).len(), 3);
    }

    #[tokio::test]
    async fn cycles_are_ignored_without_halt_flag() {
        let grid = GridConfig::new(2, 2, SeedPolicy::Fixed(vec![]));
        let mut game = Game::new(config(grid, Some(4), false), TermSink::new(Vec::new()));

        let outcome = game.run().await.unwrap();
        assert_eq!(outcome.reason, StopReason::GenerationLimit);
        assert_eq!(frames(game).len(), 5);
    }

    #[tokio::test]
    async fn invalid_dimension_aborts_before_rendering() {
        let grid = GridConfig::new(0, 3, SeedPolicy::default());
        let mut game = Game::new(config(grid, None, false), TermSink::new(Vec::new()));

        let err = game.run().await.unwrap_err();
        assert!(err.downcast_ref::<conway::Error>().is_some());
        assert!(frames(game).is_empty());
    }

    #[tokio::test]
    async fn can_be_cancelled_while_sleeping() {
        let grid = GridConfig::square(4, SeedPolicy::Random { seed: Some(1) });
        let mut slow = config(grid, None, false);
        slow.rate = Duration::from_secs(3600);
        let mut game = Game::new(slow, TermSink::new(Vec::new()));

        let cancelled = tokio::select! {
            _ = game.run() => false,
            _ = tokio::time::sleep(Duration::from_millis(10)) => true,
        };
        assert!(cancelled);
        assert_eq!(frames(game).len(), 1);
    }
}
