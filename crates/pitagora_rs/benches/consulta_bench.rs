use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pitagora_rs::{ConsultaRequest, respond, respond_json, validate};

fn validate_bench(c: &mut Criterion) {
    let request = ConsultaRequest::new("  Sofía Martínez  ", "1985-09-29");
    c.bench_function("validate", |b| b.iter(|| validate(black_box(&request))));
}

fn respond_bench(c: &mut Criterion) {
    let valid = r#"{"nombreCompleto":"Sofía Martínez","fechaNacimiento":"1985-09-29"}"#;
    let invalid = r#"{"nombreCompleto":"Sofía Martínez","fechaNacimiento":"29/09/1985"}"#;
    let request = ConsultaRequest::new("Sofía Martínez", "1985-09-29");

    let mut group = c.benchmark_group("respond");
    group.bench_function("request", |b| b.iter(|| respond(black_box(&request))));
    group.bench_function("json_valid", |b| b.iter(|| respond_json(black_box(valid))));
    group.bench_function("json_invalid_date", |b| {
        b.iter(|| respond_json(black_box(invalid)))
    });
    group.bench_function("json_garbage", |b| {
        b.iter(|| respond_json(black_box("{not json")))
    });
    group.finish();
}

fn encode_bench(c: &mut Criterion) {
    let body = r#"{"nombreCompleto":"José Luis Peña","fechaNacimiento":"2000-11-13"}"#;
    let resp = respond_json(body);
    c.bench_function("response_to_json", |b| b.iter(|| black_box(&resp).to_json()));
}

criterion_group!(benches, validate_bench, respond_bench, encode_bench);
criterion_main!(benches);
