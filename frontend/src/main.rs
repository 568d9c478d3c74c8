fn main() {
    admin_dashboard_frontend::run();
}
