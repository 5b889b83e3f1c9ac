use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TabsProps {
    pub tabs: Vec<AttrValue>,
    pub active: AttrValue,
    pub on_select: Callback<AttrValue>,
}

#[function_component(Tabs)]
pub fn tabs(props: &TabsProps) -> Html {
    html! {
        <div class="tab-bar" role="tablist">
            { for props.tabs.iter().map(|tab| {
                let selected = *tab == props.active;
                let onclick = {
                    let on_select = props.on_select.clone();
                    let tab = tab.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        on_select.emit(tab.clone());
                    })
                };
                html! {
                    <button
                        key={tab.to_string()}
                        role="tab"
                        aria-selected={selected.to_string()}
                        class={classes!("tab", selected.then(|| "active"))}
                        {onclick}
                    >
                        {tab.clone()}
                    </button>
                }
            }) }
        </div>
    }
}
