//! Audio bridge systems and the background audio thread.
//!
//! This module hosts the thread that models the fire-and-forget audio
//! collaborator and the systems that bridge it with the ECS world:
//! - [`audio_thread`] runs on its own OS thread, owns the clip table, and
//!   processes [`AudioCmd`](crate::events::audio::AudioCmd) messages,
//!   emitting [`AudioMessage`](crate::events::audio::AudioMessage) replies.
//! - [`forward_audio_cmds`] pushes ECS-written commands into the channel.
//! - [`poll_audio_messages`] non-blockingly drains the thread's replies
//!   into the ECS message queue each frame.
//! - [`update_bevy_audio_cmds`]/[`update_bevy_audio_messages`] advance the
//!   message queues once per frame.
//!
//! Audio hardware stays with the host engine; the thread keeps the clip
//! table and the playback protocol (load, one-shot play at a volume,
//! unloaded-clip no-op) and logs what a device backend would do.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::Messages;
use bevy_ecs::{
    prelude::{MessageReader, MessageWriter, Res},
    system::ResMut,
};
use crossbeam_channel::{Receiver, Sender};
use log::{debug, warn};
use rustc_hash::FxHashMap;

/// Drain any pending replies from the audio thread and enqueue them into
/// the ECS [`Messages<AudioMessage>`] mailbox.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_bevy_audio_messages(mut msgs: ResMut<Messages<AudioMessage>>) {
    msgs.update();
}

/// Forward ECS [`AudioCmd`] messages to the audio thread.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // Ignore send errors during shutdown.
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for [`AudioCmd`] so same-frame readers can
/// observe writes.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Entry point of the dedicated audio thread.
///
/// Owns the clip table (id -> path), reacts to [`AudioCmd`] inputs, and
/// emits [`AudioMessage`] outputs. Playing an id that was never loaded is
/// a no-op apart from a log line. Blocks until [`AudioCmd::Shutdown`].
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    debug!(
        "[audio] thread starting (id={:?})",
        std::thread::current().id()
    );

    let mut clips: FxHashMap<String, String> = FxHashMap::default();

    'run: loop {
        for cmd in rx_cmd.try_iter() {
            match cmd {
                AudioCmd::LoadFx { id, path } => {
                    debug!("[audio] fx loaded id='{}' path='{}'", id, path);
                    clips.insert(id.clone(), path);
                    let _ = tx_msg.send(AudioMessage::FxLoaded { id });
                }
                AudioCmd::PlayFx { id, vol } => {
                    if let Some(path) = clips.get(&id) {
                        debug!("[audio] fx play id='{}' path='{}' vol={}", id, path, vol);
                        let _ = tx_msg.send(AudioMessage::FxStarted { id, vol });
                    } else {
                        warn!("[audio] fx play skipped id='{}' reason='not loaded'", id);
                    }
                }
                AudioCmd::UnloadFx { id } => {
                    if clips.remove(&id).is_some() {
                        debug!("[audio] fx unload id='{}'", id);
                        let _ = tx_msg.send(AudioMessage::FxUnloaded { id });
                    }
                }
                AudioCmd::UnloadAllFx => {
                    debug!("[audio] fx unload all");
                    clips.clear();
                    let _ = tx_msg.send(AudioMessage::FxUnloadedAll);
                }
                AudioCmd::Shutdown => {
                    debug!("[audio] shutdown requested");
                    clips.clear();
                    let _ = tx_msg.send(AudioMessage::FxUnloadedAll);
                    break 'run;
                }
            }
        }
        std::thread::sleep(std::time::Duration::from_millis(10));
    }

    debug!(
        "[audio] thread exiting (id={:?})",
        std::thread::current().id()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use std::time::Duration;

    const REPLY_TIMEOUT: Duration = Duration::from_secs(1);

    fn spawn_thread() -> (
        Sender<AudioCmd>,
        Receiver<AudioMessage>,
        std::thread::JoinHandle<()>,
    ) {
        let (tx_cmd, rx_cmd) = unbounded();
        let (tx_msg, rx_msg) = unbounded();
        let handle = std::thread::spawn(move || audio_thread(rx_cmd, tx_msg));
        (tx_cmd, rx_msg, handle)
    }

    #[test]
    fn test_play_replies_for_loaded_clips_and_skips_unloaded_ones() {
        let (tx_cmd, rx_msg, handle) = spawn_thread();

        tx_cmd
            .send(AudioCmd::LoadFx {
                id: "click".to_string(),
                path: "assets/sfx/click.ogg".to_string(),
            })
            .unwrap();
        match rx_msg.recv_timeout(REPLY_TIMEOUT).unwrap() {
            AudioMessage::FxLoaded { id } => assert_eq!(id, "click"),
            other => panic!("unexpected reply: {:?}", other),
        }

        // An id that was never loaded is a no-op. Commands are processed in
        // order, so the next reply must belong to the loaded play.
        tx_cmd
            .send(AudioCmd::PlayFx {
                id: "missing".to_string(),
                vol: 0.5,
            })
            .unwrap();
        tx_cmd
            .send(AudioCmd::PlayFx {
                id: "click".to_string(),
                vol: 0.8,
            })
            .unwrap();
        match rx_msg.recv_timeout(REPLY_TIMEOUT).unwrap() {
            AudioMessage::FxStarted { id, vol } => {
                assert_eq!(id, "click");
                assert!((vol - 0.8).abs() < 1e-6);
            }
            other => panic!("unexpected reply: {:?}", other),
        }

        tx_cmd.send(AudioCmd::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_unloaded_clip_no_longer_plays() {
        let (tx_cmd, rx_msg, handle) = spawn_thread();

        tx_cmd
            .send(AudioCmd::LoadFx {
                id: "click".to_string(),
                path: "assets/sfx/click.ogg".to_string(),
            })
            .unwrap();
        match rx_msg.recv_timeout(REPLY_TIMEOUT).unwrap() {
            AudioMessage::FxLoaded { id } => assert_eq!(id, "click"),
            other => panic!("unexpected reply: {:?}", other),
        }

        tx_cmd
            .send(AudioCmd::UnloadFx {
                id: "click".to_string(),
            })
            .unwrap();
        match rx_msg.recv_timeout(REPLY_TIMEOUT).unwrap() {
            AudioMessage::FxUnloaded { id } => assert_eq!(id, "click"),
            other => panic!("unexpected reply: {:?}", other),
        }

        // Playing the forgotten id emits nothing; the next reply comes from
        // the unload-all that follows it.
        tx_cmd
            .send(AudioCmd::PlayFx {
                id: "click".to_string(),
                vol: 1.0,
            })
            .unwrap();
        tx_cmd.send(AudioCmd::UnloadAllFx).unwrap();
        match rx_msg.recv_timeout(REPLY_TIMEOUT).unwrap() {
            AudioMessage::FxUnloadedAll => {}
            other => panic!("unexpected reply: {:?}", other),
        }

        tx_cmd.send(AudioCmd::Shutdown).unwrap();
        handle.join().unwrap();
    }
}
