mod data;
mod graphics;
mod math;
mod modes;
mod scene;
mod widgets;

use data::Program;
use modes::Mode;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let prog = Program::new().eval_args(&mut args.iter());

    match prog.mode {
        Mode::Win => modes::windowed_mode::winit_main(prog),

        #[cfg(feature = "terminal")]
        Mode::ConBlock => {
            if let Err(e) = modes::console_mode::con_main(prog) {
                data::log::eprintln_red!("Terminal mode failed");
                eprintln!("{e}");
            }
        }

        #[cfg(not(feature = "terminal"))]
        Mode::ConBlock => unreachable!("terminal mode is compiled out"),
    }
}
