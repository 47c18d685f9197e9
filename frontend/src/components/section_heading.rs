use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    pub title: AttrValue,
    #[prop_or_default]
    pub center: bool,
    /// Replaces the default dark title colour.
    #[prop_or_default]
    pub title_class: Option<AttrValue>,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    let title_class = props
        .title_class
        .clone()
        .unwrap_or_else(|| AttrValue::from("section-heading__title--dark"));

    html! {
        <div class={classes!("section-heading", props.center.then(|| "section-heading--center"))}>
            {
                if let Some(subtitle) = &props.subtitle {
                    html! { <p class="section-heading__subtitle">{subtitle.clone()}</p> }
                } else {
                    html! {}
                }
            }
            <h2 class={classes!("section-heading__title", title_class.to_string())}>{props.title.clone()}</h2>
        </div>
    }
}
