/// Session phase: collecting points, or mid-export with a save in flight.
///
/// A successful export passes through `Exporting` and returns to
/// `Collecting` once the save has completed and the session was reset.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Collecting,
    Exporting,
}
