use example_window::demo_window;

fn main() -> cushy::Result {
    demo_window().open()
}
