//! # CLI Behavior
//!
//! The command line front end: the only code that reads the terminal, writes
//! to it, or chooses an exit code.
//!
//! ## Gathering Inputs
//!
//! Each input is taken from the first source that has it:
//!
//! 1. Flag or positional argument (`--station`, `PRECIPITATION`, ...)
//! 2. Environment (`COCORAHS_STATION`, ...)
//! 3. `[CoCoRaHS]` section of the config file
//! 4. A prompt, for username and password only (the password is not echoed)
//!
//! The precipitation amount is validated before anything is prompted for or
//! sent, so a typo never costs a network round trip.
//!
//! ## Station Selection
//!
//! Without a station the account's identity is fetched. One station is used
//! directly; with several, the user is asked until they name one of them.
//!
//! ## Output and Exit Codes
//!
//! - Created: `Created new report: <url>` on stdout, exit 0.
//! - Rejected by the API: `error - <message>` on stdout, exit 1.
//! - Anything else (network, bad input): `Error: ...` on stderr, exit 1.
//!
//! ## Module Structure
//!
//! - `commands`: `run()`, input resolution, dispatch
//! - `prompt`: Interactive prompts and the station picker
//! - `render`: Printing result messages
//! - `setup`: Argument parsing via clap

mod commands;
mod prompt;
mod render;
pub mod setup;

pub use commands::run;
