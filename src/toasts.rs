//! Transient notifications shown in the top-right corner.

use bevy::prelude::*;

use crate::constants::TOAST_DURATION_SECS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    /// `Time::elapsed_secs` value after which the toast disappears
    pub expires_at: f32,
}

/// Toasts currently on screen, oldest first
#[derive(Resource, Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    pub fn success(&mut self, message: impl Into<String>, now: f32) {
        self.push(ToastKind::Success, message.into(), now);
    }

    pub fn error(&mut self, message: impl Into<String>, now: f32) {
        self.push(ToastKind::Error, message.into(), now);
    }

    /// Drop every toast that has expired at `now`
    pub fn prune(&mut self, now: f32) {
        self.items.retain(|toast| toast.expires_at > now);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn push(&mut self, kind: ToastKind, message: String, now: f32) {
        self.items.push(Toast {
            kind,
            message,
            expires_at: now + TOAST_DURATION_SECS,
        });
    }
}

fn prune_toasts(time: Res<Time>, mut toasts: ResMut<Toasts>) {
    if toasts.is_empty() {
        return;
    }
    let before = toasts.len();
    toasts.prune(time.elapsed_secs());
    if toasts.len() < before {
        debug!("Dismissed {} toast(s)", before - toasts.len());
    }
}

pub struct ToastPlugin;

impl Plugin for ToastPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Toasts>()
            .add_systems(Update, prune_toasts);
    }
}
