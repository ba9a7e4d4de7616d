//! Login Screen Component
//!
//! Access gate: one shared passphrase unlocks the app on this device.

use leptos::prelude::*;

use crate::auth;

#[component]
pub fn LoginScreen(#[prop(into)] on_login: Callback<()>) -> impl IntoView {
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if auth::check_access_key(&password.get()) {
            auth::remember_unlock();
            on_login.run(());
        } else {
            set_error.set(true);
            set_password.set(String::new());
        }
    };

    view! {
        <div class="login-screen">
            <div class="login-logo">
                <h1>"かいもの共有ポータル"</h1>
                <p class="login-tagline">"Shared Shopping List"</p>
            </div>

            <form class="login-form" on:submit=submit>
                <label class="login-label">"ACCESS KEY"</label>
                <input
                    type="password"
                    inputmode="numeric"
                    placeholder="••••"
                    class=move || if error.get() { "login-input error" } else { "login-input" }
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        set_password.set(event_target_value(&ev));
                        set_error.set(false);
                    }
                />
                <Show when=move || error.get()>
                    <p class="login-error">"認証に失敗しました"</p>
                </Show>
                <button type="submit" class="login-submit">"ポータルに入る"</button>
            </form>

            <p class="login-note">"このアプリは共有メンバー専用です。パスワードの取り扱いにご注意ください。"</p>
        </div>
    }
}
