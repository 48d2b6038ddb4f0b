pub(crate) mod capability;
pub(crate) mod clock;
pub(crate) mod recording;
pub(crate) mod simulator;
