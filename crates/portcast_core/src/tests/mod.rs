//! Integration tests for the portcast simulation engine
//!
//! Tests are organized by topic:
//! - `simulation` - Trial mechanics, rebalancing, reproducibility
//! - `sampling_policies` - Independent vs joint-year resampling
//! - `queries` - Probability and benchmark queries over full runs
//! - `roundtrip` - Serialization of configs and results

mod queries;
