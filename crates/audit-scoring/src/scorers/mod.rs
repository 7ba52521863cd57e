pub mod clabsi;
pub mod disinfection;
pub mod hand_hygiene;
pub mod hand_wash;
pub mod niv;
pub mod vap;
