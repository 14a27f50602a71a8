//! Capability ports. Each subsystem is reached only through one of these
//! traits, so the facade can be wired with any implementation.

/// Where subsystems report what they did, one line per operation.
pub trait Announcer {
    fn announce(&self, line: &str);
}

pub trait Amplifier {
    /// Reports the current volume.
    fn default_volume(&self);
    /// Sets the volume to `amount`. The name is historical: this is not an increment.
    fn volume_up(&mut self, amount: i32);
    /// Sets the volume to `amount`.
    fn volume_down(&mut self, amount: i32);
}

pub trait DvdPlayer {
    fn insert_dvd(&self, name: &str);
}

pub trait Projector {
    fn turn_on(&self);
    fn display_video(&self, name: &str);
}

pub trait PopcornPopper {
    fn make_popcorn(&self);
}
