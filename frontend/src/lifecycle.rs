use yew::Html;

/// Client-side mount state of the page. `Mounted` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Unmounted,
    Mounted,
}

impl Lifecycle {
    pub fn mount(self) -> Self {
        Lifecycle::Mounted
    }

    pub fn is_mounted(self) -> bool {
        self == Lifecycle::Mounted
    }
}

/// Renders nothing until the page has mounted.
pub fn gate(lifecycle: Lifecycle, render: impl FnOnce() -> Html) -> Html {
    if lifecycle.is_mounted() {
        render()
    } else {
        Html::default()
    }
}
