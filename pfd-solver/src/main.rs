use pfd_solver::app::run;

fn main() -> color_eyre::Result<()> {
    run()
}
