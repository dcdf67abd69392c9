//! scrollfeed binary - mount the viewer and run until quit.

use std::io;

use scrollfeed::app::App;

fn main() -> io::Result<()> {
    let mut app = App::mount()?;
    let result = app.run();
    app.unmount();
    result
}
