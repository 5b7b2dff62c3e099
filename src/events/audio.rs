//! Commands and messages exchanged with the background audio thread.

use bevy_ecs::message::Message;

/// Commands sent *to* the audio thread.
///
/// Playback is fire-and-forget: [`AudioCmd::PlayFx`] for a clip id that was
/// never loaded is a no-op.
#[derive(Message, Debug, Clone)]
pub enum AudioCmd {
    /// Register a clip under an id.
    LoadFx { id: String, path: String },
    /// One-shot playback of a loaded clip at the given volume in [0, 1].
    PlayFx { id: String, vol: f32 },
    /// Forget a single clip.
    UnloadFx { id: String },
    /// Forget every clip.
    UnloadAllFx,
    /// Stop the thread.
    Shutdown,
}

/// Messages sent *back* from the audio thread.
#[derive(Message, Debug, Clone)]
pub enum AudioMessage {
    FxLoaded { id: String },
    FxStarted { id: String, vol: f32 },
    FxUnloaded { id: String },
    FxUnloadedAll,
}
