use std::io::{self, Write};
use std::panic;
use std::thread;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use crate::error::*;
use crate::layer::*;
use crate::ray::*;
use crate::render::*;
use crate::tracer::*;

// a fan of rays from the same source, angles in degrees
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sweep {
    pub from: f64,
    pub to: f64,
    pub count: usize,
    #[serde(default)]
    pub jitter: bool,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SweepRay {
    pub angle: f64,
    pub result: TraceResult,
}

// one table row per ray
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SweepSummary {
    pub angle: f64,
    pub termination: Termination,
    pub layers_traversed: usize,
    pub final_x: f64,
    pub total_time: f64,
}

impl Sweep {
    pub fn new(from: f64, to: f64, count: usize) -> Self {
	Sweep {
	    from,
	    to,
	    count,
	    jitter: false,
	    seed: None,
	}
    }

    pub fn jittered(self, seed: Option<u64>) -> Self {
	Sweep {
	    jitter: true,
	    seed,
	    ..self
	}
    }

    // evenly spaced including both ends, or one random angle per stratum when jittered
    pub fn angles(&self) -> Vec<f64> {
	if self.count == 0 {
	    return Vec::new();
	}
	if !self.jitter {
	    if self.count == 1 {
		return vec![self.from];
	    }
	    let step = (self.to - self.from) / (self.count - 1) as f64;
	    return (0..self.count).map(|i| self.from + step * i as f64).collect();
	}

	let mut rng = match self.seed {
	    Some(seed) => StdRng::seed_from_u64(seed),
	    None => StdRng::from_entropy(),
	};
	let width = (self.to - self.from) / self.count as f64;
	(0..self.count)
	    .map(|i| self.from + (i as f64 + rng.gen::<f64>()) * width)
	    .collect()
    }

    // both ends and the span between them must be finite, like any incidence angle
    pub fn check(&self) -> Result<(), ModelError> {
	let ends = [("sweep from", self.from), ("sweep to", self.to), ("sweep span", self.to - self.from)];
	for (name, value) in ends {
	    if !value.is_finite() {
		return Err(ModelError::NonNumericInput { field: format!("{} = {}", name, value) });
	    }
	}
	Ok(())
    }

    // rays are split across threads, every cpus-th angle to the same worker
    pub fn run(&self, model: &SeismicModel, source: &SourceSpec) -> Result<Vec<SweepRay>, ModelError> {
	self.check()?;
	let angles = self.angles();
	let cpus = num_cpus::get().min(angles.len()).max(1);
	debug!("sweeping {} angles on {} threads", angles.len(), cpus);

	let mut per_thread = Vec::with_capacity(cpus);
	thread::scope(|s| {
	    let mut threads = Vec::with_capacity(cpus);

	    for threadindex in 0..cpus {
		let angles = &angles;
		threads.push(s.spawn(move || {
		    angles.iter()
			.skip(threadindex)
			.step_by(cpus)
			.map(|&angle| SweepRay {
			    angle,
			    result: trace(model, &source.with_angle(angle)),
			})
			.collect::<Vec<_>>()
		}));
	    }

	    for thread in threads {
		match thread.join() {
		    Ok(rays) => per_thread.push(rays.into_iter()),
		    Err(payload) => panic::resume_unwind(payload),
		}
	    }
	});

	// undo the interleaving
	let mut result = Vec::with_capacity(angles.len());
	for i in 0..angles.len() {
	    if let Some(ray) = per_thread[i % cpus].next() {
		result.push(ray);
	    }
	}
	Ok(result)
    }
}

impl SweepRay {
    pub fn summary(&self) -> SweepSummary {
	SweepSummary {
	    angle: self.angle,
	    termination: self.result.termination,
	    layers_traversed: self.result.layers_traversed(),
	    final_x: self.result.endpoint().map_or(0.0, |vertex| vertex.x),
	    total_time: self.result.total_time(),
	}
    }
}

pub fn write_summary(rays: &[SweepRay], format: Format, out: &mut dyn Write) -> io::Result<()> {
    let rows: Vec<SweepSummary> = rays.iter().map(SweepRay::summary).collect();
    match format {
	Format::Json => {
	    serde_json::to_writer_pretty(&mut *out, &rows)?;
	    writeln!(out)
	},
	_ => {
	    writeln!(out, "{:>10} {:>10} {:>7} {:>14} {:>12}", "angle", "end", "layers", "final x", "time")?;
	    for row in rows {
		let end = match row.termination {
		    Termination::Exhausted => "exhausted".to_owned(),
		    Termination::Critical { layer } => format!("critical@{}", layer),
		};
		writeln!(out, "{:>10.4} {:>10} {:>7} {:>14.4} {:>12.6}",
			 row.angle, end, row.layers_traversed, row.final_x, row.total_time)?;
	    }
	    Ok(())
	},
    }
}
