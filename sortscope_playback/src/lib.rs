// Copyright 2026 the Sortscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input generation and playback pacing for sortscope front ends.
//!
//! - [`generate`]: random integer sequences with the length and range
//!   options of a typical "random array" dialog.
//! - [`player`]: a position into a recorded trace that advances on demand
//!   or on a fixed per-step delay.
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use sortscope_core::engine::Algorithm;
//! use sortscope_playback::generate::{GeneratorConfig, generate_with_rng};
//! use sortscope_playback::player::{PlaybackConfig, Player};
//!
//! let input = generate_with_rng(&GeneratorConfig::DEFAULT, &mut StdRng::seed_from_u64(1));
//! let result = Algorithm::Insertion.run(&input);
//! let mut player = Player::new(&result.trace, PlaybackConfig::AUTO.with_delay_ms(50));
//! player.tick(std::time::Duration::from_millis(120));
//! assert_eq!(player.position(), 2);
//! ```

pub mod generate;
pub mod player;
