use egui::Pos2;

/// Even-odd ray casting test.
///
/// A horizontal ray is cast from `point` towards +x and every polygon edge it
/// crosses flips the result. The polygon is implicitly closed between its last
/// and first point. Paths with fewer than 3 points never enclose anything.
pub fn is_point_in_path(point: Pos2, path: &[Pos2]) -> bool {
    if path.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = path.len() - 1;
    for i in 0..path.len() {
        let (pi, pj) = (path[i], path[j]);
        // Edges parallel to the ray never satisfy the first condition, so the
        // division below cannot be by zero.
        if (pi.y > point.y) != (pj.y > point.y)
            && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn square() -> Vec<Pos2> {
        vec![pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(10.0, 10.0), pos2(0.0, 10.0)]
    }

    #[test]
    fn test_point_inside_square() {
        assert!(is_point_in_path(pos2(5.0, 5.0), &square()));
    }

    #[test]
    fn test_point_outside_square() {
        assert!(!is_point_in_path(pos2(15.0, 5.0), &square()));
        assert!(!is_point_in_path(pos2(-1.0, 5.0), &square()));
        assert!(!is_point_in_path(pos2(5.0, 20.0), &square()));
    }

    #[test]
    fn test_short_paths_never_enclose() {
        let line = [pos2(0.0, 0.0), pos2(100.0, 100.0)];
        for query in [pos2(0.0, 0.0), pos2(50.0, 50.0), pos2(-3.0, 7.0)] {
            assert!(!is_point_in_path(query, &line));
            assert!(!is_point_in_path(query, &line[..1]));
            assert!(!is_point_in_path(query, &[]));
        }
    }

    #[test]
    fn test_concave_polygon() {
        // A "U" shape: the notch between the arms is outside
        let u = vec![
            pos2(0.0, 0.0),
            pos2(30.0, 0.0),
            pos2(30.0, 30.0),
            pos2(20.0, 30.0),
            pos2(20.0, 10.0),
            pos2(10.0, 10.0),
            pos2(10.0, 30.0),
            pos2(0.0, 30.0),
        ];
        assert!(is_point_in_path(pos2(5.0, 20.0), &u));
        assert!(is_point_in_path(pos2(25.0, 20.0), &u));
        assert!(!is_point_in_path(pos2(15.0, 20.0), &u));
    }
}
