use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Compare uninformed grid searches under dynamic obstacles", long_about = None)]
pub struct Config {
    #[arg(long, default_value_t = 30)]
    pub width: i32,

    #[arg(long, default_value_t = 30)]
    pub height: i32,

    #[arg(long, default_value_t = 2)]
    pub start_x: i32,

    #[arg(long, default_value_t = 2)]
    pub start_y: i32,

    #[arg(long, default_value_t = 27)]
    pub target_x: i32,

    #[arg(long, default_value_t = 27)]
    pub target_y: i32,

    #[arg(long, default_value_t = 100)]
    pub num_walls: usize,

    /// Chance per expansion step that a dynamic obstacle appears.
    #[arg(long, default_value_t = 0.03)]
    pub spawn_probability: f64,

    /// bfs, dfs, ucs, dls, iddfs, bidirectional or all.
    #[arg(long, default_value = "all")]
    pub algorithm: String,

    #[arg(long, default_value_t = 60)]
    pub depth_limit: usize,

    /// Seed for walls and obstacle spawning; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = false)]
    pub show_grid: bool,

    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: 30,
            height: 30,
            start_x: 2,
            start_y: 2,
            target_x: 27,
            target_y: 27,
            num_walls: 100,
            spawn_probability: 0.03,
            algorithm: "all".to_string(),
            depth_limit: 60,
            seed: None,
            show_grid: false,
            quiet: false,
        }
    }
}
