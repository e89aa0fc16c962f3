//! Widget declarations.
//!
//! A [`Window`] exclusively owns an ordered list of [`Widget`]s. Rendering
//! and event wiring only ever see widgets through the window that owns them;
//! there is no global registry. Callbacks receive a typed [`WidgetEvent`]
//! identifying the widget that raised the event and carrying its payload.

use std::panic::UnwindSafe;

use cushy::value::{Destination, Dynamic, Source};
use cushy::widget::Callback;

/// The payload delivered to a widget callback, tagged by the kind of widget
/// that raised it.
#[derive(Clone, Debug, PartialEq)]
pub enum WidgetEvent {
    /// A button was activated.
    ButtonPressed {
        /// The label of the button that was activated.
        sender: String,
    },
    /// The contents of a text input changed.
    InputChanged {
        /// The label of the input whose contents changed.
        sender: String,
        /// The input's new contents.
        value: String,
    },
    /// A slider's value changed.
    SliderChanged {
        /// The label of the slider whose value changed.
        sender: String,
        /// The slider's new value.
        value: f32,
    },
}

impl WidgetEvent {
    /// Returns the label of the widget that raised this event.
    #[must_use]
    pub fn sender(&self) -> &str {
        match self {
            WidgetEvent::ButtonPressed { sender }
            | WidgetEvent::InputChanged { sender, .. }
            | WidgetEvent::SliderChanged { sender, .. } => sender,
        }
    }
}

/// A callback invoked with a [`WidgetEvent`] when its widget raises an event.
pub type WidgetCallback = Callback<WidgetEvent>;

/// A window and the widgets it exclusively owns.
///
/// Widgets are displayed in the order they are pushed and live for as long as
/// the window does. Equality compares observable state only: the title and
/// each widget's labels, values, and bounds. Callbacks are not observable and
/// do not participate.
#[derive(Debug, Default)]
pub struct Window {
    pub(crate) title: String,
    pub(crate) widgets: Vec<Widget>,
}

impl Window {
    /// Returns an empty window titled `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            widgets: Vec::new(),
        }
    }

    /// Appends `widget` to this window's children.
    pub fn push(&mut self, widget: impl Into<Widget>) {
        self.widgets.push(widget.into());
    }

    /// Returns this window's title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns this window's widgets in declaration order.
    #[must_use]
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// Returns this window's widgets for mutation, in declaration order.
    pub fn widgets_mut(&mut self) -> &mut [Widget] {
        &mut self.widgets
    }
}

impl PartialEq for Window {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.widgets == other.widgets
    }
}

/// A single widget owned by a [`Window`].
#[derive(Debug, PartialEq)]
pub enum Widget {
    /// A static text label.
    Text(Text),
    /// A clickable button.
    Button(Button),
    /// A single-line text field.
    Input(Input),
    /// A bounded floating-point slider.
    Slider(Slider),
}

impl Widget {
    /// Returns the text identifying this widget: its label for interactive
    /// widgets, the displayed contents for a text label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Widget::Text(text) => text.contents(),
            Widget::Button(button) => button.label(),
            Widget::Input(input) => input.label(),
            Widget::Slider(slider) => slider.label(),
        }
    }
}

/// A static, immutable text label.
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub(crate) contents: String,
}

impl Text {
    /// Returns a label displaying `contents`.
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
        }
    }

    /// Returns the displayed text.
    #[must_use]
    pub fn contents(&self) -> &str {
        &self.contents
    }
}

impl From<Text> for Widget {
    fn from(text: Text) -> Self {
        Widget::Text(text)
    }
}

/// A clickable button.
#[derive(Debug)]
pub struct Button {
    pub(crate) label: String,
    pub(crate) on_click: Option<WidgetCallback>,
}

impl Button {
    /// Returns a button labeled `label` with no callback attached.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_click: None,
        }
    }

    /// Attaches `on_click`, invoked with [`WidgetEvent::ButtonPressed`] each
    /// time the button is activated.
    #[must_use]
    pub fn on_click<F>(mut self, on_click: F) -> Self
    where
        F: FnMut(WidgetEvent) + Send + UnwindSafe + 'static,
    {
        self.on_click = Some(Callback::new(on_click));
        self
    }

    /// Returns this button's label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Activates this button, invoking its callback as if it had been
    /// clicked. Buttons without a callback do nothing.
    pub fn press(&mut self) {
        if let Some(on_click) = &mut self.on_click {
            on_click.invoke(WidgetEvent::ButtonPressed {
                sender: self.label.clone(),
            });
        }
    }
}

impl PartialEq for Button {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl From<Button> for Widget {
    fn from(button: Button) -> Self {
        Widget::Button(button)
    }
}

/// A single-line text field with a mutable string value.
#[derive(Debug)]
pub struct Input {
    pub(crate) label: String,
    pub(crate) value: Dynamic<String>,
    pub(crate) on_change: Option<WidgetCallback>,
}

impl Input {
    /// Returns a field labeled `label` whose contents are initialized to
    /// `default_value`.
    pub fn new(label: impl Into<String>, default_value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: Dynamic::new(default_value.into()),
            on_change: None,
        }
    }

    /// Attaches `on_change`, invoked with [`WidgetEvent::InputChanged`] each
    /// time the field's contents change.
    #[must_use]
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: FnMut(WidgetEvent) + Send + UnwindSafe + 'static,
    {
        self.on_change = Some(Callback::new(on_change));
        self
    }

    /// Returns this field's label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the field's current contents.
    #[must_use]
    pub fn contents(&self) -> String {
        self.value.get()
    }

    /// Replaces the field's contents, notifying the change callback.
    pub fn set(&mut self, contents: impl Into<String>) {
        let contents = contents.into();
        self.value.set(contents.clone());
        if let Some(on_change) = &mut self.on_change {
            on_change.invoke(WidgetEvent::InputChanged {
                sender: self.label.clone(),
                value: contents,
            });
        }
    }
}

impl PartialEq for Input {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label && self.contents() == other.contents()
    }
}

impl From<Input> for Widget {
    fn from(input: Input) -> Self {
        Widget::Input(input)
    }
}

/// A bounded floating-point slider.
///
/// The lower bound is always [`Slider::MINIMUM`]. Writes through
/// [`set`](Self::set) are clamped to the slider's bounds before being stored.
#[derive(Debug)]
pub struct Slider {
    pub(crate) label: String,
    pub(crate) value: Dynamic<f32>,
    pub(crate) minimum: f32,
    pub(crate) maximum: f32,
    pub(crate) on_change: Option<WidgetCallback>,
}

impl Slider {
    /// The implicit lower bound of every slider.
    pub const MINIMUM: f32 = 0.;

    /// Returns a slider labeled `label` covering `0.0..=max_value`, with its
    /// value initialized to `default_value` clamped to those bounds.
    ///
    /// A `max_value` below the lower bound is raised to it.
    pub fn new(label: impl Into<String>, default_value: f32, max_value: f32) -> Self {
        let maximum = max_value.max(Self::MINIMUM);
        Self {
            label: label.into(),
            value: Dynamic::new(default_value.clamp(Self::MINIMUM, maximum)),
            minimum: Self::MINIMUM,
            maximum,
            on_change: None,
        }
    }

    /// Attaches `on_change`, invoked with [`WidgetEvent::SliderChanged`] each
    /// time the slider's value changes.
    #[must_use]
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: FnMut(WidgetEvent) + Send + UnwindSafe + 'static,
    {
        self.on_change = Some(Callback::new(on_change));
        self
    }

    /// Returns this slider's label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the slider's current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value.get()
    }

    /// Returns the slider's lower bound.
    #[must_use]
    pub fn minimum(&self) -> f32 {
        self.minimum
    }

    /// Returns the slider's upper bound.
    #[must_use]
    pub fn maximum(&self) -> f32 {
        self.maximum
    }

    /// Stores `value` clamped to the slider's bounds, notifying the change
    /// callback with the value actually stored.
    pub fn set(&mut self, value: f32) {
        let clamped = value.clamp(self.minimum, self.maximum);
        self.value.set(clamped);
        if let Some(on_change) = &mut self.on_change {
            on_change.invoke(WidgetEvent::SliderChanged {
                sender: self.label.clone(),
                value: clamped,
            });
        }
    }
}

impl PartialEq for Slider {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
            && self.value() == other.value()
            && self.minimum == other.minimum
            && self.maximum == other.maximum
    }
}

impl From<Slider> for Widget {
    fn from(slider: Slider) -> Self {
        Widget::Slider(slider)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn recorded_events() -> (Arc<Mutex<Vec<WidgetEvent>>>, impl FnMut(WidgetEvent)) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let recorder = {
            let events = events.clone();
            move |event| events.lock().unwrap().push(event)
        };
        (events, recorder)
    }

    #[test]
    fn window_owns_widgets_in_declaration_order() {
        let mut window = Window::new("Demo");
        window.push(Text::new("one"));
        window.push(Button::new("two"));
        window.push(Input::new("three", ""));
        window.push(Slider::new("four", 0., 1.));

        assert_eq!(window.title(), "Demo");
        let labels = window
            .widgets()
            .iter()
            .map(Widget::label)
            .collect::<Vec<_>>();
        assert_eq!(labels, ["one", "two", "three", "four"]);
        assert!(matches!(window.widgets()[0], Widget::Text(_)));
        assert!(matches!(window.widgets()[1], Widget::Button(_)));
        assert!(matches!(window.widgets()[2], Widget::Input(_)));
        assert!(matches!(window.widgets()[3], Widget::Slider(_)));
    }

    #[test]
    fn button_press_raises_typed_event() {
        let (events, recorder) = recorded_events();
        let mut button = Button::new("Save").on_click(recorder);
        button.press();
        button.press();
        assert_eq!(
            *events.lock().unwrap(),
            [
                WidgetEvent::ButtonPressed {
                    sender: String::from("Save")
                },
                WidgetEvent::ButtonPressed {
                    sender: String::from("Save")
                },
            ]
        );
    }

    #[test]
    fn button_press_without_callback_is_a_no_op() {
        let mut button = Button::new("Save");
        button.press();
        assert_eq!(button.label(), "Save");
    }

    #[test]
    fn input_set_notifies_with_new_contents() {
        let (events, recorder) = recorded_events();
        let mut input = Input::new("string", "before").on_change(recorder);
        input.set("after");
        assert_eq!(input.contents(), "after");
        assert_eq!(
            *events.lock().unwrap(),
            [WidgetEvent::InputChanged {
                sender: String::from("string"),
                value: String::from("after"),
            }]
        );
    }

    #[test]
    fn slider_clamps_writes_to_bounds() {
        let mut slider = Slider::new("float", 0.273, 1.);
        slider.set(2.);
        assert_eq!(slider.value(), 1.);
        slider.set(-1.);
        assert_eq!(slider.value(), 0.);
        slider.set(0.5);
        assert_eq!(slider.value(), 0.5);
    }

    #[test]
    fn slider_clamps_out_of_range_defaults() {
        assert_eq!(Slider::new("float", 7., 1.).value(), 1.);
        assert_eq!(Slider::new("float", -7., 1.).value(), 0.);
        // An inverted bound collapses the range to the lower bound.
        assert_eq!(Slider::new("float", 0.5, -3.).maximum(), 0.);
    }

    #[test]
    fn slider_notifies_with_the_stored_value() {
        let (events, recorder) = recorded_events();
        let mut slider = Slider::new("float", 0., 1.).on_change(recorder);
        slider.set(3.);
        assert_eq!(
            *events.lock().unwrap(),
            [WidgetEvent::SliderChanged {
                sender: String::from("float"),
                value: 1.,
            }]
        );
    }

    #[test]
    fn event_sender_names_the_raising_widget() {
        let event = WidgetEvent::InputChanged {
            sender: String::from("string"),
            value: String::new(),
        };
        assert_eq!(event.sender(), "string");
    }

    #[test]
    fn equality_ignores_callbacks() {
        let with_callback = Button::new("Save").on_click(|_| {});
        assert_eq!(with_callback, Button::new("Save"));
        assert_ne!(with_callback, Button::new("Cancel"));
    }
}
