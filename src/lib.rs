//! Learn how zero-knowledge proofs enable private on-chain voting through
//! an interactive terminal walkthrough.
//!
//! `zkvote` is a teaching tool, not a voting system. It walks through
//! blockchain fundamentals, the transaction lifecycle, and zero-knowledge
//! proof concepts, then lets the user cast simulated votes through a
//! traditional flow and a ZK flow side by side. Every proof, tally, and
//! on-chain figure is hard-coded or randomly generated locally; nothing
//! touches a real chain, circuit, or wallet.
//!
//! The interactive pieces are small state machines kept separate from the
//! terminal so they can be exercised directly:
//!
//! - [i18n]: bilingual interface text with a persisted language preference.
//! - [wallet]: the narrow wallet surface the interface consumes, with an
//!   in-process simulation behind it.
//! - [explorer]: position in a fixed step sequence, advanced by hand or by
//!   a timed auto-play.
//! - [ballot]: the selection-and-submission flow, with a simulated proving
//!   delay and a placeholder proof for the ZK variant.
//! - [results]: the fixed election tallies and their display formatting.
//! - [content]: the static teaching material everything renders.
//! - [ui] and [logger]: the terminal shell and its captured log pane.

pub mod ballot;
pub mod content;
pub mod explorer;
pub mod i18n;
pub mod logger;
pub mod results;
pub mod ui;
pub mod wallet;
