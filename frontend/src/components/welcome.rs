//! Send form

use leptos::*;
use prime::FormField;

use crate::components::Loader;
use crate::context::use_transactions;

/// On-screen keyboard hint. Inputs stay `type="text"` so an unparsable
/// amount reaches submit validation instead of arriving empty.
fn input_mode(field: FormField) -> &'static str {
    match field {
        FormField::Amount => "decimal",
        _ => "text",
    }
}

#[component]
fn FormInput(field: FormField) -> impl IntoView {
    let ctx = use_transactions();
    let state = ctx.state;

    view! {
        <input
            class="form-input"
            name=field.name()
            placeholder=field.placeholder()
            type="text"
            inputmode=input_mode(field)
            prop:value=move || state.with(|s| s.form.get(field).to_string())
            on:input=move |ev| ctx.change_handler(field, event_target_value(&ev))
        />
    }
}

#[component]
pub fn Welcome() -> impl IntoView {
    let ctx = use_transactions();
    let state = ctx.state;
    let last_error = ctx.last_error;

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        ctx.send_transaction();
    };

    view! {
        <section class="welcome">
            <h1>"Send Crypto" <br/> "across the world"</h1>
            <p class="subtitle">
                "Explore the crypto world. Buy and sell cryptocurrencies easily on Prime."
            </p>

            <form class="send-form" on:submit=on_submit>
                <FormInput field=FormField::AddressTo/>
                <FormInput field=FormField::Amount/>
                <FormInput field=FormField::Keyword/>
                <FormInput field=FormField::Message/>

                <div class="divider"></div>

                <Show
                    when=move || state.with(|s| s.is_loading)
                    fallback=|| view! { <button type="submit" class="btn-send">"Send now"</button> }
                >
                    <Loader/>
                </Show>

                <Show when=move || last_error.with(Option::is_some) fallback=|| ()>
                    <p class="form-error">{move || last_error.get().unwrap_or_default()}</p>
                </Show>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_amount_uses_decimal_keyboard() {
        let modes: Vec<_> = FormField::ALL.iter().map(|f| input_mode(*f)).collect();
        assert_eq!(modes, ["text", "decimal", "text", "text"]);
    }
}
