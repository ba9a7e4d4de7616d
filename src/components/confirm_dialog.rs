//! Danger Confirmation Dialog
//!
//! Modal confirmation for the destructive operations. Factory reset asks for
//! its own passphrase on top of the confirmation; a wrong passphrase keeps
//! the input so the user can correct a typo.

use leptos::prelude::*;

use crate::auth;

/// The destructive operation being confirmed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DangerOp {
    /// Empty the current site's list
    ClearList,
    /// Empty the history ledger
    ClearHistory,
    /// Wipe the shared document and this device's session flag
    FactoryReset,
}

impl DangerOp {
    fn title(self) -> &'static str {
        match self {
            DangerOp::ClearList => "現在のカゴを空にしますか？",
            DangerOp::ClearHistory => "過去の履歴をすべて消去しますか？",
            DangerOp::FactoryReset => "すべて初期化しますか？",
        }
    }

    fn confirm_label(self) -> &'static str {
        match self {
            DangerOp::FactoryReset => "初期化する",
            _ => "はい、消去する",
        }
    }

    fn needs_passphrase(self) -> bool {
        self == DangerOp::FactoryReset
    }
}

#[component]
pub fn ConfirmDialog(
    op: DangerOp,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let (passphrase, set_passphrase) = signal(String::new());
    let (pass_error, set_pass_error) = signal(false);

    let confirm = move |_| {
        if op.needs_passphrase() && !auth::check_reset_key(&passphrase.get()) {
            set_pass_error.set(true);
            return;
        }
        on_confirm.run(());
    };

    view! {
        <div class="modal-overlay">
            <div class="modal-backdrop" on:click=move |_| on_cancel.run(())></div>
            <div class="confirm-box">
                <h3 class="confirm-title">{op.title()}</h3>

                <Show when=move || op.needs_passphrase()>
                    <p class="confirm-note">"初期状態（データなし）にリセットされます"</p>
                    <input
                        type="password"
                        placeholder="パスワードを入力"
                        class=move || if pass_error.get() { "confirm-pass error" } else { "confirm-pass" }
                        prop:value=move || passphrase.get()
                        on:input=move |ev| {
                            set_passphrase.set(event_target_value(&ev));
                            set_pass_error.set(false);
                        }
                    />
                    <Show when=move || pass_error.get()>
                        <p class="confirm-pass-error">"パスワードが違います"</p>
                    </Show>
                </Show>

                <div class="confirm-actions">
                    <button class="confirm-yes" on:click=confirm>
                        {op.confirm_label()}
                    </button>
                    <button class="confirm-cancel" on:click=move |_| on_cancel.run(())>
                        "キャンセル"
                    </button>
                </div>
            </div>
        </div>
    }
}
