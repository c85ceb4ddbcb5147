//! Two-step delete button. The first press arms the button and relabels
//! it; a second press inside the arming window confirms. If the window
//! lapses the button falls back to idle, so a stray click minutes later
//! cannot delete anything.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const ARM_WINDOW_MS: u32 = 4000;

/// Arming state for a destructive two-step action. Each arm opens a new
/// window identified by its generation, so a lapsed window from an
/// earlier arm cannot disarm a later one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TwoStepArm {
    armed: bool,
    generation: u64,
}

impl TwoStepArm {
    /// Returns true when this press confirms the action.
    pub fn press(&mut self) -> bool {
        if self.armed {
            self.armed = false;
            true
        } else {
            self.armed = true;
            self.generation += 1;
            false
        }
    }

    pub fn armed(&self) -> bool {
        self.armed
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Close the window opened at `generation`; ignored once a newer
    /// window is live.
    pub fn lapse(&mut self, generation: u64) {
        if self.armed && self.generation == generation {
            self.armed = false;
        }
    }
}

#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let arm = RwSignal::new(TwoStepArm::default());

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        let confirmed = arm.try_update(|a| a.press()).unwrap_or(false);
        if confirmed {
            on_confirm.run(());
            return;
        }
        let opened = arm.get_untracked().generation();
        spawn_local(async move {
            TimeoutFuture::new(ARM_WINDOW_MS).await;
            arm.update(|a| a.lapse(opened));
        });
    };

    view! {
        <button
            class=move || {
                if arm.get().armed() {
                    format!("{button_class} armed")
                } else {
                    button_class.clone()
                }
            }
            on:click=on_click
        >
            {move || if arm.get().armed() { "Confirm delete" } else { "Delete" }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_press_arms_second_press_confirms() {
        let mut arm = TwoStepArm::default();
        assert!(!arm.press());
        assert!(arm.armed());
        assert!(arm.press());
        assert!(!arm.armed());
    }

    #[test]
    fn lapsed_window_disarms() {
        let mut arm = TwoStepArm::default();
        arm.press();
        let opened = arm.generation();
        arm.lapse(opened);
        assert!(!arm.armed());
        // A press after the lapse starts over instead of confirming.
        assert!(!arm.press());
    }

    #[test]
    fn stale_window_cannot_disarm_a_rearm() {
        let mut arm = TwoStepArm::default();
        arm.press();
        let first = arm.generation();
        assert!(arm.press());
        arm.press();
        arm.lapse(first);
        assert!(arm.armed());
        arm.lapse(arm.generation());
        assert!(!arm.armed());
    }
}
