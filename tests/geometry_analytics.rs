// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry analytics verification tests against files on disk

mod support;

use anyhow::Result;
use heritage_eval::geometry::{analyze, Mesh};
use heritage_eval::io::{load_mesh, MeshFormat};
use nalgebra::Vector3;
use std::f64::consts::PI;
use std::fmt::Write as _;
use std::path::Path;
use support::Primitive;
use tempfile::TempDir;

fn write_obj(mesh: &Mesh, path: &Path) -> Result<()> {
    let mut obj = String::new();
    for v in &mesh.vertices {
        writeln!(obj, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for t in &mesh.triangles {
        let [a, b, c] = t.indices;
        writeln!(obj, "f {} {} {}", a + 1, b + 1, c + 1)?;
    }
    std::fs::write(path, obj)?;
    Ok(())
}

fn write_ascii_stl(mesh: &Mesh, path: &Path) -> Result<()> {
    let mut stl = String::from("solid test\n");
    for t in &mesh.triangles {
        stl.push_str("  facet normal 0 0 0\n    outer loop\n");
        for &i in &t.indices {
            let v = mesh.vertices[i];
            writeln!(stl, "      vertex {} {} {}", v.x, v.y, v.z)?;
        }
        stl.push_str("    endloop\n  endfacet\n");
    }
    stl.push_str("endsolid test\n");
    std::fs::write(path, stl)?;
    Ok(())
}

fn write_ascii_ply(mesh: &Mesh, path: &Path) -> Result<()> {
    let mut ply = String::new();
    writeln!(ply, "ply\nformat ascii 1.0")?;
    writeln!(ply, "element vertex {}", mesh.vertices.len())?;
    writeln!(ply, "property float x\nproperty float y\nproperty float z")?;
    writeln!(ply, "element face {}", mesh.triangles.len())?;
    writeln!(ply, "property list uchar int vertex_indices\nend_header")?;
    for v in &mesh.vertices {
        writeln!(ply, "{} {} {}", v.x, v.y, v.z)?;
    }
    for t in &mesh.triangles {
        let [a, b, c] = t.indices;
        writeln!(ply, "3 {} {} {}", a, b, c)?;
    }
    std::fs::write(path, ply)?;
    Ok(())
}

#[test]
fn test_cube_volume_and_surface_area_obj() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("cube.obj");
    write_obj(
        &Primitive::cube(Vector3::new(10.0, 10.0, 10.0), true).to_mesh(),
        &path,
    )?;

    let stats = analyze(&load_mesh(&path, &MeshFormat::Obj)?);

    assert!((stats.volume - 1000.0).abs() < 1e-6, "volume {}", stats.volume);
    assert!(
        (stats.surface_area - 600.0).abs() < 1e-6,
        "area {}",
        stats.surface_area
    );
    assert_eq!(stats.vertex_count, 8);
    assert_eq!(stats.face_count, 12);
    assert_eq!(stats.edge_count, 18);
    assert!(stats.is_watertight);
    Ok(())
}

#[test]
fn test_stl_soup_is_watertight_after_load() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("cube.stl");
    write_ascii_stl(
        &Primitive::cube(Vector3::new(2.0, 2.0, 2.0), false).to_mesh(),
        &path,
    )?;

    let stats = analyze(&load_mesh(&path, &MeshFormat::Stl)?);

    assert_eq!(stats.face_count, 12);
    assert!((stats.volume - 8.0).abs() < 1e-4, "volume {}", stats.volume);
    assert!(stats.is_watertight);
    Ok(())
}

#[test]
fn test_formats_agree_on_cylinder() -> Result<()> {
    let dir = TempDir::new()?;
    let mesh = Primitive::cylinder(10.0, 3.0, 48).to_mesh();
    let reference = analyze(&mesh);

    let obj = dir.path().join("cyl.obj");
    let ply = dir.path().join("cyl.ply");
    write_obj(&mesh, &obj)?;
    write_ascii_ply(&mesh, &ply)?;

    for (path, format) in [(&obj, MeshFormat::Obj), (&ply, MeshFormat::Ply)] {
        let stats = analyze(&load_mesh(path, &format)?);
        assert_eq!(stats.face_count, reference.face_count, "{}", format);
        assert_eq!(stats.vertex_count, reference.vertex_count, "{}", format);
        assert!(
            (stats.volume - reference.volume).abs() < 1e-3,
            "{}: {} vs {}",
            format,
            stats.volume,
            reference.volume
        );
        assert_eq!(stats.is_watertight, reference.is_watertight);
    }
    Ok(())
}

#[test]
fn test_open_sphere_is_not_watertight() {
    let stats = analyze(&Primitive::sphere(5.0, 24).to_mesh());
    assert!(!stats.is_watertight);
    assert!(stats.surface_area > 0.0);
}

#[test]
fn test_cube_generation() {
    let mesh = Primitive::cube(Vector3::new(10.0, 10.0, 10.0), false).to_mesh();
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.triangle_count(), 12);
    assert!(analyze(&mesh).is_watertight);
}

#[test]
fn test_cylinder_vertex_reuse() {
    // 2 cap centers + 2 rims of 16
    let mesh = Primitive::cylinder(10.0, 5.0, 16).to_mesh();
    assert_eq!(mesh.vertex_count(), 2 + 16 * 2);
    assert_eq!(mesh.triangle_count(), 16 * 4);
    assert!(analyze(&mesh).is_watertight);
}

#[test]
fn test_cylinder_volume() {
    let props = analyze(&Primitive::cylinder(10.0, 5.0, 256).to_mesh());
    let expected = PI * 25.0 * 10.0;
    assert!((props.volume - expected).abs() / expected < 0.01);
}

#[test]
fn test_sphere_triangle_count() {
    let mesh = Primitive::sphere(5.0, 32).to_mesh();
    assert_eq!(mesh.triangle_count(), 32 * 32 * 2);
}
