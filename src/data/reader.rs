use crate::data::*;

const HELP: &str = "\
driftvis - drifting-circle backdrop with a lost-revenue calculator

  --win          windowed mode (default)
  --block        render in the terminal with half blocks (terminal builds)
  --size WxH     internal canvas size in pixels
  --scale N      window pixel scale
  --fps N        lock the refresh rate instead of following the monitor
  --seed N       fix the anchor jitter seed
  --paused       start with the animation frozen

keys: 1/2/3 pick a slider, -/= adjust it, / resets,
      q/w/e/r toggle FAQ panels, space pauses, esc quits
";

impl Program {
    pub fn eval_args(mut self, args: &mut dyn Iterator<Item = &String>) -> Self {
        use crate::modes::Mode::*;

        let mut size = (DEFAULT_WIN_W, DEFAULT_WIN_H);

        let mut args = args.peekable();
        args.next();

        loop {
            let arg = match args.next() {
                Some(st) => st.as_str(),
                None => break,
            };

            match arg {
                "--win" => self.mode = Win,

                #[cfg(feature = "terminal")]
                "--block" => self.mode = ConBlock,

                "--paused" => self.paused = true,

                "--size" => {
                    let s = args
                        .next()
                        .expect("Argument error: Expected value for size.")
                        .split('x')
                        .map(|x| x.parse::<u16>().expect("Argument error: Invalid value"))
                        .collect::<Vec<_>>();

                    if s.len() != 2 {
                        panic!("Argument error: size must look like 320x180");
                    }

                    size = (s[0].min(MAX_WIDTH), s[1].min(MAX_HEIGHT));
                }

                "--scale" => {
                    self.scale = args
                        .next()
                        .expect("Argument error: Expected u8 value for scale")
                        .parse::<u8>()
                        .expect("Argument error: Invalid value");

                    if self.scale == 0 {
                        panic!("Argument error: scale is 0");
                    }
                }

                "--fps" => {
                    let fps = args
                        .next()
                        .expect("Argument error: Expected value for fps")
                        .parse::<u32>()
                        .expect("Argument error: Invalid value");

                    if fps == 0 {
                        panic!("Argument error: fps is 0");
                    }

                    self.refresh_rate_mode = RefreshRateMode::Specified;
                    self.change_fps_frac((fps * 1000).min(CAP_MILLI_HZ));
                }

                "--seed" => {
                    let seed = args
                        .next()
                        .expect("Argument error: Expected value for seed")
                        .parse::<u32>()
                        .expect("Argument error: Invalid value");

                    self.set_seed(seed);
                }

                "--help" | "-h" => {
                    print!("{}", HELP);
                    std::process::exit(0);
                }

                _ => panic!("Argument error: unknown flag {}", arg),
            }
        }

        if self.mode == Win {
            self.update_size(size);
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use crate::data::Program;

    fn run(args: &[&str]) -> Program {
        let owned: Vec<String> = std::iter::once("driftvis")
            .chain(args.iter().copied())
            .map(str::to_string)
            .collect();

        Program::new().eval_args(&mut owned.iter())
    }

    #[test]
    fn size_flag_resizes_canvas_and_scene() {
        let prog = run(&["--size", "240x120"]);
        assert_eq!(prog.pix.sizeu(), (240, 120));
        assert_eq!(prog.scene.viewport(), (240.0, 120.0));
    }

    #[test]
    fn fps_flag_locks_refresh_rate() {
        use crate::data::RefreshRateMode;

        let prog = run(&["--fps", "30"]);
        assert_eq!(prog.milli_hz, 30_000);
        assert!(prog.refresh_rate_mode == RefreshRateMode::Specified);
    }

    #[test]
    fn seed_flag_is_reproducible() {
        let a = run(&["--seed", "11", "--size", "240x120"]);
        let b = run(&["--seed", "11", "--size", "240x120"]);

        for (ca, cb) in a.scene.clusters().iter().zip(b.scene.clusters()) {
            for (xa, xb) in ca.circles().iter().zip(cb.circles()) {
                assert_eq!(xa.phase(), xb.phase());
                assert_eq!(xa.pos(), xb.pos());
            }
        }
    }

    #[test]
    fn paused_flag_starts_frozen() {
        let prog = run(&["--paused"]);
        assert!(prog.is_paused());
    }

    #[test]
    #[should_panic(expected = "Argument error")]
    fn unknown_flag_panics() {
        run(&["--bogus"]);
    }
}
