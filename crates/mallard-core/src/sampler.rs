//! The kind-selection seam.
//!
//! Roster generation draws one catalog index per instance through the
//! [`Sampler`] trait. Engines consume it; sampler implementations and
//! test doubles provide it. The production sampler lives in
//! `mallard-engine`, scripted doubles in `mallard-test-utils`.

/// Selects which catalog kind to instantiate for each roster slot.
///
/// # Contract
///
/// - `pick()` receives the catalog size and must return an index in
///   `0..kind_count`. An out-of-range pick aborts roster generation
///   with an error instead of panicking.
/// - Draws are independent; the sampler may keep internal state (an
///   RNG position, a script cursor) but never sees what was picked
///   before beyond its own bookkeeping.
///
/// # Object safety
///
/// This trait is object-safe; run configurations store samplers as
/// `Box<dyn Sampler>`.
pub trait Sampler {
    /// Pick the catalog index for the next instance.
    fn pick(&mut self, kind_count: usize) -> usize;
}
