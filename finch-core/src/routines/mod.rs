//! Talent show routines

pub mod talent;

pub use talent::{
    dance, light_and_sound, mixing_it_up, play_note, play_note_with_led, Note, Phrase,
    RoutineError, DANCE_SPEED_MAX, DANCE_SPEED_MIN,
};
