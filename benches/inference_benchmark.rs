use criterion::{black_box, criterion_group, criterion_main, Criterion};
use triage::{
    encode, infer, DecisionTree, EncodedLabel, LabelMap, ModelBundle, TreeNode, Vocabulary,
};

fn synthetic_vocabulary(size: usize) -> Vocabulary {
    let terms: Vec<String> = (0..size).map(|i| format!("symptom_{}", i)).collect();
    Vocabulary::from_terms(terms).unwrap()
}

/// Builds a bundle whose classifier is a split chain over every feature,
/// so prediction cost tracks vocabulary size.
fn synthetic_bundle(vocab_size: usize) -> ModelBundle {
    let vocabulary = synthetic_vocabulary(vocab_size);

    let depth = vocab_size;
    let mut nodes = Vec::with_capacity(2 * depth + 1);
    for i in 0..depth {
        nodes.push(TreeNode::Split {
            feature: i,
            threshold: 0.5,
            left: i + 1,
            right: depth + 1 + i,
        });
    }
    nodes.push(TreeNode::Leaf {
        label: EncodedLabel(depth as u32),
    });
    for i in 0..depth {
        nodes.push(TreeNode::Leaf {
            label: EncodedLabel(i as u32),
        });
    }
    let classifier = DecisionTree {
        n_features: vocab_size,
        nodes,
    };

    let labels: Vec<String> = (0..=depth).map(|i| format!("diagnosis_{}", i)).collect();
    let decoder = LabelMap::new(labels).unwrap();

    ModelBundle::new(vocabulary, Box::new(classifier), Box::new(decoder))
}

/// Raw request entries with mixed case and stray whitespace, so the
/// normalization path gets exercised too.
fn request_symptoms(count: usize, vocab_size: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("  Symptom_{} ", (i * 7) % vocab_size))
        .collect()
}

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("Encoding");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    for &size in &[10, 100, 1000] {
        let vocabulary = synthetic_vocabulary(size);
        let symptoms = request_symptoms(5, size);
        group.bench_function(format!("vocab_{}", size), |b| {
            b.iter(|| encode(black_box(&symptoms), &vocabulary).unwrap())
        });
    }

    group.finish();
}

fn bench_inference(c: &mut Criterion) {
    let mut group = c.benchmark_group("Inference");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    for &size in &[10, 100, 1000] {
        let bundle = synthetic_bundle(size);
        let symptoms = request_symptoms(5, size);
        group.bench_function(format!("vocab_{}", size), |b| {
            b.iter(|| infer(black_box(&symptoms), &bundle).unwrap())
        });
    }

    group.finish();
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scaling");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    // Scaling with the number of symptoms in one request
    let bundle = synthetic_bundle(100);
    for &count in &[1, 5, 20] {
        let symptoms = request_symptoms(count, 100);
        group.bench_function(format!("symptoms_{}", count), |b| {
            b.iter(|| infer(black_box(&symptoms), &bundle).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encoding, bench_inference, bench_scaling);
criterion_main!(benches);
