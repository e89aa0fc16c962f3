//! Lowers widget declarations into cushy widgets and runs the event loop.

use cushy::value::Source;
use cushy::widget::{MakeWidget, WidgetInstance, WidgetList};
use cushy::widgets::input::InputValue;
use cushy::widgets::slider::Slidable;
use cushy::Run;

use crate::declare::{Widget, WidgetEvent, Window};

impl Window {
    /// Opens this window and blocks until the user closes it.
    ///
    /// Rendering, layout, and input handling all happen inside cushy's event
    /// loop; callbacks registered on the declaration are invoked as their
    /// widgets raise events.
    pub fn open(self) -> cushy::Result {
        tracing::debug!(
            title = %self.title,
            widgets = self.widgets.len(),
            "opening window"
        );
        self.widgets
            .into_iter()
            .map(Widget::into_cushy)
            .collect::<WidgetList>()
            .into_rows()
            .pad()
            .into_window()
            .titled(self.title)
            .run()
    }
}

impl Widget {
    fn into_cushy(self) -> WidgetInstance {
        match self {
            Widget::Text(text) => text.contents.make_widget(),
            Widget::Button(button) => {
                let sender = button.label.clone();
                let mut on_click = button.on_click;
                button
                    .label
                    .into_button()
                    .on_click(move |_| {
                        if let Some(on_click) = &mut on_click {
                            on_click.invoke(WidgetEvent::ButtonPressed {
                                sender: sender.clone(),
                            });
                        }
                    })
                    .make_widget()
            }
            Widget::Input(input) => {
                if let Some(mut on_change) = input.on_change {
                    let sender = input.label.clone();
                    input
                        .value
                        .for_each_subsequent(move |contents: &String| {
                            on_change.invoke(WidgetEvent::InputChanged {
                                sender: sender.clone(),
                                value: contents.clone(),
                            });
                        })
                        .persist();
                }
                input
                    .label
                    .and(input.value.into_input())
                    .into_columns()
                    .make_widget()
            }
            Widget::Slider(slider) => {
                if let Some(mut on_change) = slider.on_change {
                    let sender = slider.label.clone();
                    slider
                        .value
                        .for_each_subsequent(move |value: &f32| {
                            on_change.invoke(WidgetEvent::SliderChanged {
                                sender: sender.clone(),
                                value: *value,
                            });
                        })
                        .persist();
                }
                slider
                    .label
                    .and(slider.value.slider_between(slider.minimum, slider.maximum))
                    .into_columns()
                    .make_widget()
            }
        }
    }
}
