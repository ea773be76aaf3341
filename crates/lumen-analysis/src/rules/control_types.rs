//! Control-type sets, in the folded form `UiNode::type_key` produces.

/// Controls that render readable text.
pub const TEXT: &[&str] = &[
    "label",
    "text",
    "textblock",
    "htmltext",
    "richtext",
    "heading",
    "paragraph",
    "button",
    "link",
    "textinput",
    "textbox",
];

/// Controls that accept typed user input.
pub const INPUT: &[&str] = &[
    "textinput",
    "textbox",
    "input",
    "textarea",
    "emailinput",
    "passwordinput",
    "phoneinput",
    "numberinput",
    "datepicker",
    "dropdown",
    "combobox",
];

pub const LINK: &[&str] = &["link", "hyperlink", "anchor", "a", "navlink"];

pub const IMAGE: &[&str] = &["image", "img", "picture", "icon", "imagebutton", "logo"];

/// Controls that lay out children and may clip them.
pub const CONTAINER: &[&str] = &[
    "container",
    "group",
    "panel",
    "section",
    "div",
    "card",
    "gallery",
    "form",
    "verticalcontainer",
    "horizontalcontainer",
    "scrollablecontainer",
];

/// Controls a user operates, which therefore need an accessible name.
pub const INTERACTIVE: &[&str] = &[
    "button",
    "iconbutton",
    "imagebutton",
    "link",
    "hyperlink",
    "textinput",
    "textbox",
    "input",
    "textarea",
    "dropdown",
    "combobox",
    "checkbox",
    "radio",
    "toggle",
    "slider",
    "datepicker",
];

/// Interactive controls whose visible text doubles as their accessible name.
pub const BUTTON_LIKE: &[&str] = &["button", "link", "hyperlink"];
