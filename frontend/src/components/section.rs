use yew::prelude::*;

use site_core::Theme;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: AttrValue,
    #[prop_or(Theme::Dark)]
    pub theme: Theme,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// A labeled page region. `data-section` marks it for the visibility
/// tracker and `data-theme` declares the ink the header should use while
/// this region is active.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section
            id={props.id.clone()}
            data-section=""
            data-theme={props.theme.as_str()}
            aria-labelledby={format!("{}-title", props.id)}
            class={classes!("section-shell", props.class.clone())}
        >
            { for props.children.iter() }
        </section>
    }
}
