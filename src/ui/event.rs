//! Event handling module for the application
//!
//! Terminal events are polled on a dedicated thread and forwarded to
//! the main loop over a channel, so the UI thread only ever blocks on
//! `recv`. The thread is told to stop and joined when the handler is
//! dropped.
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

/// Events that can be processed by the application
#[derive(Debug, Clone, Copy)]
pub enum Event
{
    /// Regular time tick for updating UI elements
    Tick,
    /// Keyboard input event
    Key(KeyEvent),
    /// Terminal resize event with new dimensions
    Resize(u16, u16),
}

/// Handles terminal events
///
/// Manages event handling in a separate thread and provides
/// a way to receive events through a channel.
pub struct EventHandler
{
    /// Receiver side of the event channel to get events from the handler thread
    event_receiver: mpsc::Receiver<Event>,
    /// Sender for shutdown the thread for graceful shutdown
    // The receiver is moved to the thread
    shutdown_sender: mpsc::Sender<()>,
    /// Handle to keep the thread alive
    // Option is used to move the handle in `drop`
    // since we can't move the handle out of the `&mut self`
    // for calling `join` in `drop`
    thread_handle: Option<JoinHandle<()>>,
}

impl EventHandler
{
    /// Creates a new event handler with the specified tick rate
    ///
    /// # Arguments
    ///
    /// * `tick_rate` - The duration between tick events
    ///
    /// # Returns
    ///
    /// A new `EventHandler` instance with a running background thread
    #[must_use]
    pub fn new(tick_rate: Duration) -> Self
    {
        let (event_sender, event_receiver) = mpsc::channel();
        let (shutdown_sender, shutdown_receiver) = mpsc::channel();

        let handle = thread::spawn(move || {
            poll_loop(tick_rate, &event_sender, &shutdown_receiver);
        });

        Self {
            event_receiver,
            shutdown_sender,
            thread_handle: Some(handle),
        }
    }

    /// Gets the next event from the event channel
    ///
    /// This method blocks until an event is available
    ///
    /// # Errors
    ///
    /// Returns an error if the channel is disconnected.
    pub fn next(&self) -> Result<Event>
    {
        self.event_receiver
            .recv()
            .context("Event channel disconnected")
    }
}

/// Body of the polling thread.
///
/// Polls crossterm with a timeout derived from the tick rate so that
/// tick events keep flowing while the terminal is quiet. Stops when the
/// shutdown channel fires or the receiving side goes away.
fn poll_loop(
    tick_rate: Duration,
    event_sender: &mpsc::Sender<Event>,
    shutdown_receiver: &mpsc::Receiver<()>,
)
{
    let mut last_tick = Instant::now();

    loop
    {
        if shutdown_receiver.try_recv().is_ok()
        {
            break;
        }

        // If more time than tick_rate has passed, don't wait at all
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());

        if event::poll(timeout).expect("Error polling events")
        {
            match event::read().expect("Error reading event")
            {
                // Repeats and releases (reported on some platforms)
                // would double every keystroke, so only presses pass.
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press =>
                {
                    // Break the loop if sending fails (receiver dropped)
                    if event_sender.send(Event::Key(key)).is_err()
                    {
                        break;
                    }
                }
                CrosstermEvent::Resize(width, height) =>
                {
                    if event_sender
                        .send(Event::Resize(width, height))
                        .is_err()
                    {
                        break;
                    }
                }
                // Ignore other event types
                _ =>
                {}
            }
        }

        // Generate tick events for regular updates
        if last_tick.elapsed() >= tick_rate
        {
            if event_sender.send(Event::Tick).is_err()
            {
                break;
            }
            last_tick = Instant::now();
        }
    }
}

impl Drop for EventHandler
{
    fn drop(&mut self)
    {
        // Signal shutdown (ignore if already closed)
        let _ = self.shutdown_sender.send(());

        // Wait for thread to finish
        if let Some(handle) = self.thread_handle.take()
        {
            let _ = handle.join();
        }
    }
}
