#![windows_subsystem = "windows"]

use anyhow::Result;
use swipense::gui;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    gui::launch()
}
