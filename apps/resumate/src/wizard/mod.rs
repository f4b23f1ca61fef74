// Resume builder wizard: seven ordered steps feeding one draft.
// Steps are freely navigable; validation happens per entry on commit and
// for the whole draft on submit.

pub mod advisories;
pub mod editors;
pub mod navigator;
pub mod session;
