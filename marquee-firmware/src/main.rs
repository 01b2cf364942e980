//! Marquee - Scrolling LED matrix sign firmware
//!
//! The sign is a dumb I2C peripheral: an external controller pushes a
//! message in chunks plus visibility and speed commands, and the
//! firmware scrolls the text across a 40x8 WS2812 matrix, moving to the
//! next palette color on every wrap.

#![no_std]
#![no_main]

mod config;
mod panel;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c;
use embassy_rp::i2c_slave::{self, I2cSlave};
use embassy_rp::peripherals::{I2C0, PIO0};
use embassy_rp::pio::{InterruptHandler as PioInterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::Timer;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use marquee_core::font::FONT_5PX;
use marquee_core::palette::EMBER;
use marquee_core::Marquee;
use marquee_protocol::BusCommand;

use crate::config::{
    BUS_BUFFER_SIZE, DEFAULT_MESSAGE, I2C_ADDRESS, IDLE_POLL_MS, MATRIX_HEIGHT, MATRIX_WIDTH,
};
use crate::panel::MatrixPanel;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
});

type Session = Marquee<MATRIX_WIDTH, MATRIX_HEIGHT>;

/// Shared display session: the bus task applies commands, the scroll
/// task renders. A commit swaps the whole message under the lock, so a
/// tick sees either the old message or the new one, never a torn write.
static SESSION: Mutex<CriticalSectionRawMutex, Session> =
    Mutex::new(Session::new(&FONT_5PX, &EMBER));

/// PIO program storage; must live as long as the strip driver
static WS2812_PROGRAM: StaticCell<PioWs2812Program<'static, PIO0>> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Marquee firmware starting...");

    let p = embassy_rp::init(Default::default());

    // WS2812 matrix on PIO0 + DMA, data line on GPIO16
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = WS2812_PROGRAM.init(PioWs2812Program::new(&mut common));
    let strip = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_16, program);
    let panel = MatrixPanel::new(strip);
    info!("Panel initialized");

    // I2C peripheral for the controller (GPIO4 = SDA, GPIO5 = SCL)
    let mut i2c_config = i2c_slave::Config::default();
    i2c_config.addr = I2C_ADDRESS;
    let device = I2cSlave::new(p.I2C0, p.PIN_5, p.PIN_4, Irqs, i2c_config);
    info!("Bus initialized at address {}", I2C_ADDRESS);

    // Power-up message until the controller sends its own
    SESSION.lock().await.set_message(DEFAULT_MESSAGE);

    spawner.spawn(bus_task(device)).unwrap();
    spawner.spawn(scroll_task(panel)).unwrap();

    info!("All tasks spawned, sign running");
}

/// Bus task - receives command deliveries from the controller.
///
/// One completed write transaction is one delivery. Short or unknown
/// deliveries parse to `None` and are dropped; the sign never signals
/// an error back over the bus.
#[embassy_executor::task]
async fn bus_task(mut device: I2cSlave<'static, I2C0>) {
    info!("Bus task started");

    let mut buf = [0u8; BUS_BUFFER_SIZE];

    loop {
        match device.listen(&mut buf).await {
            Ok(i2c_slave::Command::Write(len)) => {
                trace!("delivery: {} bytes", len);
                if let Some(command) = BusCommand::parse(&buf[..len]) {
                    SESSION.lock().await.apply(command);
                } else {
                    trace!("delivery ignored");
                }
            }
            Ok(i2c_slave::Command::GeneralCall(_)) => {}
            Ok(i2c_slave::Command::Read) | Ok(i2c_slave::Command::WriteRead(_)) => {
                // The sign exposes a single status byte: visibility
                let visible = SESSION.lock().await.is_visible();
                if let Err(e) = device.respond_to_read(&[u8::from(visible)]).await {
                    warn!("status read failed: {:?}", e);
                }
            }
            Err(e) => {
                warn!("bus listen error: {:?}", e);
            }
        }
    }
}

/// Scroll task - one render tick per configured interval.
///
/// Hidden path: keep the panel dark and poll slowly; the scroll offset
/// holds its value so showing the sign again resumes where it left off.
#[embassy_executor::task]
async fn scroll_task(mut panel: MatrixPanel) {
    info!("Scroll task started");

    loop {
        let wait_ms = {
            let mut session = SESSION.lock().await;
            if session.is_visible() {
                session.tick();
                panel.flush(session.frame()).await;
                u64::from(session.interval_ms())
            } else {
                session.blank();
                panel.flush(session.frame()).await;
                IDLE_POLL_MS
            }
        };
        Timer::after_millis(wait_ms).await;
    }
}
