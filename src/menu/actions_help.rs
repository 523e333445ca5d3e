use gtk4::prelude::*;
use gtk4::{AboutDialog, Application, ApplicationWindow, License};

pub fn setup(app: &Application, window: &ApplicationWindow) {
    let about_action = gtk4::gio::SimpleAction::new("about", None);
    let win_weak = window.downgrade();

    about_action.connect_activate(move |_, _| {
        if let Some(win) = win_weak.upgrade() {
            let dialog = AboutDialog::builder()
                .transient_for(&win)
                .modal(true)
                .program_name("CellAdjust")
                .version(env!("CARGO_PKG_VERSION"))
                .comments(
                    "Define a periodic cell, draw it over the structure and re-centre \
                     atoms in the XY plane around a picked reference point.",
                )
                .license_type(License::MitX11)
                .logo_icon_name("applications-science")
                .build();

            dialog.present();
        }
    });
    app.add_action(&about_action);
}
